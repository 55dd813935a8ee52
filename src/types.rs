//! Core types shared by the script builders

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit transaction hash
pub type Hash = [u8; 32];

/// Hash160: RIPEMD160(SHA256(x)), identifies a public key or a script
pub type Hash160 = [u8; 20];

/// Byte string type
pub type ByteString = Vec<u8>;

/// OutPoint: reference to a previous transaction output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

/// Raw transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub script_sig: ByteString,
    pub sequence: u32,
}

/// Raw transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: u64,
    pub script_pubkey: ByteString,
}

/// Raw transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

/// Signature hash type tag appended to every signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum SigHashType {
    #[default]
    All = 0x01,
    None = 0x02,
    Single = 0x03,
    AnyoneCanPay = 0x80,
}

impl SigHashType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Which form of unlocking script to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptSigMode {
    /// Final spending script, only populated signatures
    Broadcast,
    /// Partially signed script keeping empty placeholders
    Edit,
    /// Substitute script used while computing a signature hash
    Sign,
}

/// Append the sighash tag to raw signature bytes
pub(crate) fn tagged_signature(sig: &[u8], sig_hash_type: SigHashType) -> ByteString {
    let mut tagged = Vec::with_capacity(sig.len() + 1);
    tagged.extend_from_slice(sig);
    tagged.push(sig_hash_type.as_u8());
    tagged
}
