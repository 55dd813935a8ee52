//! Hash primitives used for key and script identification

use crate::types::Hash160;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

pub fn ripemd160(data: &[u8]) -> Hash160 {
    Ripemd160::digest(data).into()
}

/// Hash160: RIPEMD160(SHA256(x))
pub fn hash160(data: &[u8]) -> Hash160 {
    ripemd160(&sha256(data))
}
