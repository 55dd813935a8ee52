//! Address codec: Base58Check with a double-SHA-256 checksum
//!
//! An address is `base58(version || payload || checksum)` where the checksum is
//! the first four bytes of SHA256(SHA256(version || payload)).

use crate::error::{Result, ScriptError};
use bitcoin_hashes::{sha256d, Hash as BitcoinHash};
use serde::{Deserialize, Serialize};

const CHECKSUM_LEN: usize = 4;

/// Network selector for address version presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

/// Version byte pair: pay-to-address first, pay-to-script-hash second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressVersions {
    pub pay_to_address: u8,
    pub pay_to_script_hash: u8,
}

impl AddressVersions {
    pub const BITCOIN: AddressVersions = AddressVersions {
        pay_to_address: 0x00,
        pay_to_script_hash: 0x05,
    };

    pub const TESTNET: AddressVersions = AddressVersions {
        pay_to_address: 0x6f,
        pay_to_script_hash: 0xc4,
    };

    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::BITCOIN,
            Network::Testnet => Self::TESTNET,
        }
    }
}

impl Default for AddressVersions {
    fn default() -> Self {
        Self::BITCOIN
    }
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d::Hash::hash(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Encode `payload` under `version` as a Base58Check string
pub fn encode(payload: &[u8], version: u8) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    let check = checksum(&data);
    data.extend_from_slice(&check);
    bs58::encode(data).into_string()
}

/// Decode a Base58Check string into `(payload, version)`
///
/// The payload length is not checked here; callers that need a hash160
/// enforce it themselves.
pub fn decode(address: &str) -> Result<(Vec<u8>, u8)> {
    let data = bs58::decode(address)
        .into_vec()
        .map_err(|e| ScriptError::InvalidBase58(e.to_string()))?;

    if data.len() < 1 + CHECKSUM_LEN {
        return Err(ScriptError::InvalidBase58(format!(
            "decoded length {} is too short",
            data.len()
        )));
    }

    let (body, check) = data.split_at(data.len() - CHECKSUM_LEN);
    if checksum(body) != check {
        return Err(ScriptError::InvalidChecksum);
    }

    Ok((body[1..].to_vec(), body[0]))
}
