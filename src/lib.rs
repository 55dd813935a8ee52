//! # Standard-Scripts
//!
//! Construction and parsing of standard locking and unlocking scripts:
//! pay-to-address, bare M-of-N multisig, and pay-to-script-hash.
//!
//! ## Components
//!
//! - [`address`]: Base58Check address codec and network version bytes
//! - [`output`]: locking scripts for an address and value
//! - [`redeem_script`]: M-of-N redeem script builder and strict parser
//! - [`input`]: the three input forms and their unlocking scripts
//! - [`builder`]: a transaction session that owns inputs and outputs and can
//!   reload them from an existing transaction
//!
//! All operations are synchronous and deterministic. Signing is not done
//! here: callers supply signature bytes computed elsewhere.
//!
//! ## Usage
//!
//! ```rust
//! use standard_scripts::*;
//!
//! let mut redeem = MultiSigRedeemScript::new(1, AddressVersions::BITCOIN).unwrap();
//! redeem.add_pub_key(&[0x02; 33]).unwrap();
//! let address = redeem.address().unwrap();
//! assert!(address.starts_with('3'));
//!
//! let prevout = OutPoint { hash: [0; 32], index: 0 };
//! let mut input = MultiSigInput::new(prevout, &redeem, SEQUENCE_FINAL);
//! input.add_signature(&[0x02; 33], &[0x30; 70], SigHashType::All).unwrap();
//!
//! let mut builder = TransactionBuilder::new();
//! builder.add_input(input);
//! builder.pay_to(&address, 10_000, AddressVersions::BITCOIN).unwrap();
//!
//! let tx = builder.to_transaction(ScriptSigMode::Broadcast).unwrap();
//! assert_eq!(tx.inputs[0].script_sig[0], OP_FALSE);
//! ```

pub mod types;
pub mod constants;
pub mod error;
pub mod hash;
pub mod address;
pub mod push;
pub mod output;
pub mod redeem_script;
pub mod input;
pub mod builder;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use error::{Result, ScriptError};
pub use address::{AddressVersions, Network};
pub use output::StandardOutput;
pub use redeem_script::MultiSigRedeemScript;
pub use input::{MultiSigInput, PayToAddressInput, ScriptHashInput, StandardInput, StandardTxIn};
pub use builder::TransactionBuilder;
