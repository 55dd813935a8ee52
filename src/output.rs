//! Output script builder: locking scripts from addresses

use crate::address::{self, AddressVersions};
use crate::constants::*;
use crate::error::{Result, ScriptError};
use crate::types::*;

/// Pay-to-address locking script:
/// `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG`
pub fn pay_to_address_script(hash: &Hash160) -> ByteString {
    let mut script = Vec::with_capacity(25);
    script.push(OP_DUP);
    script.push(OP_HASH160);
    script.push(HASH160_LEN as u8);
    script.extend_from_slice(hash);
    script.push(OP_EQUALVERIFY);
    script.push(OP_CHECKSIG);
    script
}

/// Pay-to-script-hash locking script: `OP_HASH160 <hash> OP_EQUAL`
pub fn pay_to_script_hash_script(hash: &Hash160) -> ByteString {
    let mut script = Vec::with_capacity(23);
    script.push(OP_HASH160);
    script.push(HASH160_LEN as u8);
    script.extend_from_slice(hash);
    script.push(OP_EQUAL);
    script
}

/// Output paying to a standard address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardOutput {
    pub value: u64,
    pub script_pubkey: ByteString,
}

impl StandardOutput {
    pub fn new(address: &str, value: u64, versions: AddressVersions) -> Result<Self> {
        let mut output = Self::default();
        output.set(address, value, versions)?;
        Ok(output)
    }

    /// Point this output at `address`. Leaves the output unchanged on error.
    pub fn set(&mut self, address: &str, value: u64, versions: AddressVersions) -> Result<()> {
        let (payload, version) = address::decode(address)?;

        let hash: Hash160 = payload
            .as_slice()
            .try_into()
            .map_err(|_| ScriptError::InvalidHashLength(payload.len()))?;

        let script_pubkey = if version == versions.pay_to_address {
            pay_to_address_script(&hash)
        } else if version == versions.pay_to_script_hash {
            pay_to_script_hash_script(&hash)
        } else {
            return Err(ScriptError::InvalidAddressVersion(version));
        };

        self.value = value;
        self.script_pubkey = script_pubkey;
        Ok(())
    }

    pub fn to_transaction_output(&self) -> TransactionOutput {
        TransactionOutput {
            value: self.value,
            script_pubkey: self.script_pubkey.clone(),
        }
    }
}

impl From<&TransactionOutput> for StandardOutput {
    fn from(output: &TransactionOutput) -> Self {
        Self {
            value: output.value,
            script_pubkey: output.script_pubkey.clone(),
        }
    }
}
