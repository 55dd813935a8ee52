//! M-of-N multisig redeem scripts
//!
//! Wire form:
//!
//! ```text
//! OP_m <len><key_1> ... <len><key_n> OP_n OP_CHECKMULTISIG
//! ```
//!
//! where `OP_m`/`OP_n` are the small-integer pushes `0x50 + m` and every key is
//! a direct push of at most 75 bytes.

use std::cell::OnceCell;

use log::trace;
use serde::Serialize;

use crate::address::{self, AddressVersions};
use crate::constants::*;
use crate::error::{Result, ScriptError};
use crate::hash::hash160;
use crate::types::ByteString;

/// Threshold condition over an ordered key list
///
/// The serialized form is cached; every mutation drops the cache so the next
/// read rebuilds it.
#[derive(Debug, Clone)]
pub struct MultiSigRedeemScript {
    min_sigs: u32,
    pub_keys: Vec<ByteString>,
    versions: AddressVersions,
    cache: OnceCell<ByteString>,
}

#[derive(Serialize)]
struct PubKeyJson {
    address: String,
    #[serde(rename = "pubKey")]
    pub_key: String,
}

#[derive(Serialize)]
struct RedeemScriptJson {
    m: u32,
    n: usize,
    address: String,
    #[serde(rename = "redeemScript")]
    redeem_script: String,
    #[serde(rename = "pubKeys", skip_serializing_if = "Option::is_none")]
    pub_keys: Option<Vec<PubKeyJson>>,
}

impl MultiSigRedeemScript {
    pub fn new(min_sigs: u32, versions: AddressVersions) -> Result<Self> {
        let mut script = Self {
            min_sigs: 1,
            pub_keys: Vec::new(),
            versions,
            cache: OnceCell::new(),
        };
        script.set_min_sigs(min_sigs)?;
        Ok(script)
    }

    /// Parse an existing redeem script, using the default address versions
    pub fn from_script(script: &[u8]) -> Result<Self> {
        let (min_sigs, pub_keys) = parse_redeem_script(script)?;
        Ok(Self {
            min_sigs,
            pub_keys,
            versions: AddressVersions::default(),
            cache: OnceCell::new(),
        })
    }

    pub fn min_sigs(&self) -> u32 {
        self.min_sigs
    }

    pub fn set_min_sigs(&mut self, min_sigs: u32) -> Result<()> {
        if !(1..=MAX_MULTISIG_KEYS as u32).contains(&min_sigs) {
            return Err(ScriptError::InvalidMinSigs(min_sigs));
        }
        self.min_sigs = min_sigs;
        self.cache.take();
        Ok(())
    }

    pub fn address_versions(&self) -> AddressVersions {
        self.versions
    }

    pub fn set_address_versions(&mut self, versions: AddressVersions) {
        self.versions = versions;
    }

    pub fn pub_keys(&self) -> &[ByteString] {
        &self.pub_keys
    }

    pub fn pub_key_count(&self) -> usize {
        self.pub_keys.len()
    }

    pub fn clear_pub_keys(&mut self) {
        self.pub_keys.clear();
        self.cache.take();
    }

    pub fn add_pub_key(&mut self, pub_key: &[u8]) -> Result<()> {
        if self.pub_keys.len() >= MAX_MULTISIG_KEYS {
            return Err(ScriptError::TooManyKeys);
        }
        if pub_key.is_empty() {
            return Err(ScriptError::EmptyKey);
        }
        if pub_key.len() > MAX_PUBKEY_LEN {
            return Err(ScriptError::KeyTooLong(pub_key.len()));
        }
        self.pub_keys.push(pub_key.to_vec());
        self.cache.take();
        Ok(())
    }

    /// Replace threshold and keys with those parsed from `script`.
    /// Nothing changes if the script is malformed.
    pub fn parse(&mut self, script: &[u8]) -> Result<()> {
        let (min_sigs, pub_keys) = parse_redeem_script(script)?;
        self.min_sigs = min_sigs;
        self.pub_keys = pub_keys;
        self.cache.take();
        Ok(())
    }

    /// Serialized redeem script
    pub fn redeem_script(&self) -> Result<ByteString> {
        if let Some(script) = self.cache.get() {
            return Ok(script.clone());
        }
        let script = build_redeem_script(self.min_sigs, &self.pub_keys)?;
        trace!(
            "rebuilt {}-of-{} redeem script ({} bytes)",
            self.min_sigs,
            self.pub_keys.len(),
            script.len()
        );
        let _ = self.cache.set(script.clone());
        Ok(script)
    }

    /// Pay-to-script-hash address of this redeem script
    pub fn address(&self) -> Result<String> {
        let script_hash = hash160(&self.redeem_script()?);
        Ok(address::encode(&script_hash, self.versions.pay_to_script_hash))
    }

    /// Diagnostic JSON rendering, optionally listing every key with its own
    /// pay-to-address form
    pub fn to_json(&self, show_pub_keys: bool) -> Result<String> {
        let pub_keys: Option<Vec<PubKeyJson>> = show_pub_keys.then(|| {
            self.pub_keys
                .iter()
                .map(|key| PubKeyJson {
                    address: address::encode(&hash160(key), self.versions.pay_to_address),
                    pub_key: hex::encode(key),
                })
                .collect()
        });

        let json = RedeemScriptJson {
            m: self.min_sigs,
            n: self.pub_keys.len(),
            address: self.address()?,
            redeem_script: hex::encode(self.redeem_script()?),
            pub_keys,
        };

        serde_json::to_string_pretty(&json).map_err(|e| ScriptError::Serialization(e.to_string()))
    }
}

impl PartialEq for MultiSigRedeemScript {
    fn eq(&self, other: &Self) -> bool {
        self.min_sigs == other.min_sigs
            && self.pub_keys == other.pub_keys
            && self.versions == other.versions
    }
}

impl Eq for MultiSigRedeemScript {}

/// Encode `OP_m <keys> OP_n OP_CHECKMULTISIG`
pub fn build_redeem_script(min_sigs: u32, pub_keys: &[ByteString]) -> Result<ByteString> {
    let n = pub_keys.len();
    if min_sigs as usize > n {
        return Err(ScriptError::InsufficientKeys { min_sigs, keys: n });
    }
    if min_sigs < 1 || min_sigs as usize > MAX_MULTISIG_KEYS {
        return Err(ScriptError::InvalidMinSigs(min_sigs));
    }
    if n > MAX_MULTISIG_KEYS {
        return Err(ScriptError::TooManyKeys);
    }

    let mut script = Vec::with_capacity(3 + pub_keys.iter().map(|k| k.len() + 1).sum::<usize>());
    script.push(small_int_opcode(min_sigs as u8));
    for key in pub_keys {
        if key.is_empty() {
            return Err(ScriptError::EmptyKey);
        }
        if key.len() > MAX_PUBKEY_LEN {
            return Err(ScriptError::KeyTooLong(key.len()));
        }
        script.push(key.len() as u8);
        script.extend_from_slice(key);
    }
    script.push(small_int_opcode(n as u8));
    script.push(OP_CHECKMULTISIG);
    Ok(script)
}

/// Decode a redeem script into `(min_sigs, pub_keys)`
///
/// Every read is bounds-checked before it happens.
pub fn parse_redeem_script(script: &[u8]) -> Result<(u32, Vec<ByteString>)> {
    if script.len() < 3 {
        return Err(ScriptError::ScriptTooShort(script.len()));
    }

    let m_op = script[0];
    if !is_small_int_opcode(m_op) {
        return Err(ScriptError::InvalidMinSigsOpcode(m_op));
    }
    let min_sigs = m_op - SMALL_INT_OFFSET;

    let mut pub_keys: Vec<ByteString> = Vec::new();
    let mut i = 1;
    while i < script.len() {
        let offset = i;
        let byte = script[i];
        i += 1;

        if is_small_int_opcode(byte) {
            let found = byte - SMALL_INT_OFFSET;
            if found as usize != pub_keys.len() {
                return Err(ScriptError::InvalidSignatureCount {
                    expected: pub_keys.len(),
                    found,
                });
            }
            if pub_keys.len() < min_sigs as usize {
                return Err(ScriptError::ThresholdExceedsKeyCount {
                    min_sigs,
                    keys: pub_keys.len(),
                });
            }
            return match script.get(i) {
                Some(&OP_CHECKMULTISIG) => Ok((min_sigs as u32, pub_keys)),
                Some(_) => Err(ScriptError::InvalidTermination { offset: i }),
                None => Err(ScriptError::UnexpectedEnd),
            };
        }

        // push-length byte
        let len = byte as usize;
        if len == 0 || byte > MAX_DIRECT_PUSH || len > script.len() - i {
            return Err(ScriptError::MalformedPush { offset });
        }
        pub_keys.push(script[i..i + len].to_vec());
        i += len;
        if pub_keys.len() > MAX_MULTISIG_KEYS {
            return Err(ScriptError::TooManyKeys);
        }
    }

    Err(ScriptError::UnexpectedEnd)
}
