//! Push-data encoding and push-only script decomposition

use crate::constants::*;
use crate::error::{Result, ScriptError};
use crate::types::ByteString;

/// Append `data` to `script` as a single minimal push
pub fn push_data(script: &mut ByteString, data: &[u8]) {
    let len = data.len();
    if len <= MAX_DIRECT_PUSH as usize {
        script.push(len as u8);
    } else if len <= u8::MAX as usize {
        script.push(OP_PUSHDATA1);
        script.push(len as u8);
    } else if len <= u16::MAX as usize {
        script.push(OP_PUSHDATA2);
        script.extend_from_slice(&(len as u16).to_le_bytes());
    } else {
        script.push(OP_PUSHDATA4);
        script.extend_from_slice(&(len as u32).to_le_bytes());
    }
    script.extend_from_slice(data);
}

/// Read a little-endian length of `width` bytes starting at `at`
fn read_len(script: &[u8], at: usize, width: usize, offset: usize) -> Result<usize> {
    let bytes = script
        .get(at..at + width)
        .ok_or(ScriptError::MalformedPush { offset })?;
    Ok(bytes
        .iter()
        .rev()
        .fold(0usize, |acc, b| (acc << 8) | *b as usize))
}

/// Split a push-only script into its pushed objects
///
/// `MalformedPush` reports the offset of the push whose declared length runs
/// past the end of the script. `NonPushOpcode` reports the first opcode that
/// is not a data push.
pub fn parse_pushes(script: &[u8]) -> Result<Vec<ByteString>> {
    let mut objects = Vec::new();
    let mut i = 0;

    while i < script.len() {
        let offset = i;
        let opcode = script[i];
        i += 1;

        let len = match opcode {
            0x00..=MAX_DIRECT_PUSH => opcode as usize,
            OP_PUSHDATA1 => {
                let len = read_len(script, i, 1, offset)?;
                i += 1;
                len
            }
            OP_PUSHDATA2 => {
                let len = read_len(script, i, 2, offset)?;
                i += 2;
                len
            }
            OP_PUSHDATA4 => {
                let len = read_len(script, i, 4, offset)?;
                i += 4;
                len
            }
            _ => return Err(ScriptError::NonPushOpcode { offset, opcode }),
        };

        if len > script.len() - i {
            return Err(ScriptError::MalformedPush { offset });
        }
        objects.push(script[i..i + len].to_vec());
        i += len;
    }

    Ok(objects)
}
