//! Script opcodes and limits

/// OP_0 / OP_FALSE - push empty array
pub const OP_FALSE: u8 = 0x00;

/// Largest length a single-byte direct push can carry
pub const MAX_DIRECT_PUSH: u8 = 0x4b;

/// Next byte holds the push length
pub const OP_PUSHDATA1: u8 = 0x4c;

/// Next two bytes (little endian) hold the push length
pub const OP_PUSHDATA2: u8 = 0x4d;

/// Next four bytes (little endian) hold the push length
pub const OP_PUSHDATA4: u8 = 0x4e;

/// OP_1 - smallest small-integer push
pub const OP_1: u8 = 0x51;

/// OP_16 - largest small-integer push
pub const OP_16: u8 = 0x60;

/// Offset between a small integer and its push opcode
pub const SMALL_INT_OFFSET: u8 = 0x50;

pub const OP_DUP: u8 = 0x76;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_CHECKMULTISIG: u8 = 0xae;

/// Length of a public key hash or script hash
pub const HASH160_LEN: usize = 20;

/// Maximum number of public keys in a multisig redeem script
pub const MAX_MULTISIG_KEYS: usize = 16;

/// Maximum public key length (single-byte push)
pub const MAX_PUBKEY_LEN: usize = MAX_DIRECT_PUSH as usize;

/// Default input sequence number
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Push opcode for a small integer in 1..=16
pub fn small_int_opcode(n: u8) -> u8 {
    n + SMALL_INT_OFFSET
}

/// True if `opcode` is one of OP_1..=OP_16
pub fn is_small_int_opcode(opcode: u8) -> bool {
    (OP_1..=OP_16).contains(&opcode)
}
