//! Error types for script construction and parsing

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Invalid base58 address: {0}")]
    InvalidBase58(String),

    #[error("Invalid address checksum")]
    InvalidChecksum,

    #[error("Invalid address version: {0:#04x}")]
    InvalidAddressVersion(u8),

    #[error("Invalid hash length: expected 20 bytes, got {0}")]
    InvalidHashLength(usize),

    #[error("Public key already set for this input")]
    KeyAlreadySet,

    #[error("No public key set for this input")]
    NoKeySet,

    #[error("Public key is not part of this input")]
    KeyMismatch,

    #[error("Public key already added: {0}")]
    DuplicateKey(String),

    #[error("Public key not yet added: {0}")]
    UnknownKey(String),

    #[error("Public key must not be empty")]
    EmptyKey,

    #[error("No signature added for this input")]
    MissingSignature,

    #[error("Signature minimum must be between 1 and 16, got {0}")]
    InvalidMinSigs(u32),

    #[error("Invalid signature minimum opcode {0:#04x}")]
    InvalidMinSigsOpcode(u8),

    #[error("Insufficient public keys: {min_sigs} signatures required, {keys} keys present")]
    InsufficientKeys { min_sigs: u32, keys: usize },

    #[error("Public key maximum of 16 exceeded")]
    TooManyKeys,

    #[error("Public keys can be a maximum of 75 bytes, got {0}")]
    KeyTooLong(usize),

    #[error("Redeem script is too short: {0} bytes")]
    ScriptTooShort(usize),

    #[error("Invalid signature count: expected {expected}, found {found}")]
    InvalidSignatureCount { expected: usize, found: u8 },

    #[error("The required signature minimum {min_sigs} exceeds the number of keys {keys}")]
    ThresholdExceedsKeyCount { min_sigs: u8, keys: usize },

    #[error("Invalid script termination at byte {offset}")]
    InvalidTermination { offset: usize },

    #[error("Invalid push at byte {offset}")]
    MalformedPush { offset: usize },

    #[error("Script terminates prematurely")]
    UnexpectedEnd,

    #[error("Non-push opcode {opcode:#04x} at byte {offset}")]
    NonPushOpcode { offset: usize, opcode: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Tried to push object that exceeds script size in input {input_index} at byte {offset}")]
    PushOverrun { input_index: usize, offset: usize },
}

pub type Result<T> = std::result::Result<T, ScriptError>;
