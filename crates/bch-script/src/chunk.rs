//! Script chunk parsing and encoding.
//!
//! A script chunk is either an opcode or a data push with its associated
//! bytes. This module handles decoding raw script bytes into structured
//! chunks and encoding push data with the correct OP_PUSHDATA prefix.

use crate::opcodes::*;
use crate::ScriptError;

/// A single parsed element of a Bitcoin Cash script.
///
/// Each chunk is either a standalone opcode (like OP_DUP) or a data push
/// that carries the opcode byte and the pushed data bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte. For direct pushes (1-75 bytes), this is the length.
    pub op: u8,
    /// The data payload, if this chunk is a push operation.
    pub data: Option<Vec<u8>>,
}

impl ScriptChunk {
    /// Build a bare opcode chunk with no data.
    pub fn op(op: u8) -> Self {
        ScriptChunk { op, data: None }
    }

    /// Build a push chunk with the smallest prefix for the payload.
    pub fn push(data: Vec<u8>) -> Self {
        let op = match data.len() {
            0 => OP_0,
            n if n <= 75 => n as u8,
            n if n <= 0xff => OP_PUSHDATA1,
            n if n <= 0xffff => OP_PUSHDATA2,
            _ => OP_PUSHDATA4,
        };
        ScriptChunk { op, data: Some(data) }
    }

    /// Return the human-readable name of this opcode.
    pub fn name(&self) -> String {
        opcode_to_string(self.op)
    }

    /// The pushed bytes, or an empty slice for non-push chunks.
    pub fn bytes(&self) -> &[u8] {
        self.data.as_deref().unwrap_or(&[])
    }

    /// Return true if this opcode is permanently disabled.
    pub fn is_disabled(&self) -> bool {
        matches!(
            self.op,
            OP_CAT
                | OP_SUBSTR
                | OP_LEFT
                | OP_RIGHT
                | OP_INVERT
                | OP_AND
                | OP_OR
                | OP_XOR
                | OP_2MUL
                | OP_2DIV
                | OP_MUL
                | OP_DIV
                | OP_MOD
                | OP_LSHIFT
                | OP_RSHIFT
        )
    }

    /// Return true if this opcode is always illegal (OP_VERIF, OP_VERNOTIF).
    pub fn always_illegal(&self) -> bool {
        matches!(self.op, OP_VERIF | OP_VERNOTIF)
    }

    /// Return true if this opcode is a conditional flow control opcode.
    pub fn is_conditional(&self) -> bool {
        matches!(
            self.op,
            OP_IF | OP_NOTIF | OP_ELSE | OP_ENDIF | OP_VERIF | OP_VERNOTIF
        )
    }

    /// Return true if this opcode needs a transaction context to execute.
    pub fn requires_tx(&self) -> bool {
        matches!(
            self.op,
            OP_CHECKSIG | OP_CHECKSIGVERIFY | OP_CHECKMULTISIG | OP_CHECKMULTISIGVERIFY
        )
    }

    /// Check if this is a canonical push (matches the smallest push opcode).
    pub fn canonical_push(&self) -> bool {
        let data_len = self.bytes().len();
        if self.op > OP_16 {
            return true;
        }
        if self.op < OP_PUSHDATA1 && self.op > OP_0 && data_len == 1 && self.bytes()[0] <= 16 {
            return false;
        }
        if self.op == OP_PUSHDATA1 && data_len < OP_PUSHDATA1 as usize {
            return false;
        }
        if self.op == OP_PUSHDATA2 && data_len <= 0xff {
            return false;
        }
        if self.op == OP_PUSHDATA4 && data_len <= 0xffff {
            return false;
        }
        true
    }

    /// Convert this chunk to its ASM string representation.
    ///
    /// Data push chunks are rendered as hex strings; non-push opcodes use
    /// their canonical OP_xxx name.
    pub fn to_asm_string(&self) -> String {
        if self.op > OP_0 && self.op <= OP_PUSHDATA4 {
            if let Some(ref data) = self.data {
                return hex::encode(data);
            }
        }
        self.name()
    }

    /// Serialize back to script bytes, preserving the original push prefix.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![self.op];
        if self.op == OP_0 || self.op > OP_PUSHDATA4 {
            return out;
        }
        match self.op {
            OP_PUSHDATA1 => {
                out.push(self.bytes().len() as u8);
                out.extend_from_slice(self.bytes());
            }
            OP_PUSHDATA2 => {
                out.extend_from_slice(&(self.bytes().len() as u16).to_le_bytes());
                out.extend_from_slice(self.bytes());
            }
            OP_PUSHDATA4 => {
                out.extend_from_slice(&(self.bytes().len() as u32).to_le_bytes());
                out.extend_from_slice(self.bytes());
            }
            _ => {
                // OP_DATA_1..OP_DATA_75
                out.extend_from_slice(self.bytes());
            }
        }
        out
    }
}

/// Decode raw script bytes into a vector of `ScriptChunk` values.
///
/// Handles OP_DATA_1..OP_DATA_75 (direct push) and OP_PUSHDATA1/2/4
/// (extended push). Every other byte, OP_RETURN included, becomes a bare
/// opcode chunk.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let op = bytes[pos];

        match op {
            OP_PUSHDATA1 => {
                if bytes.len() < pos + 2 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length = bytes[pos + 1] as usize;
                pos += 2;
                if bytes.len() < pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = bytes[pos..pos + length].to_vec();
                chunks.push(ScriptChunk { op, data: Some(data) });
                pos += length;
            }
            OP_PUSHDATA2 => {
                if bytes.len() < pos + 3 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length = u16::from_le_bytes([bytes[pos + 1], bytes[pos + 2]]) as usize;
                pos += 3;
                if bytes.len() < pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = bytes[pos..pos + length].to_vec();
                chunks.push(ScriptChunk { op, data: Some(data) });
                pos += length;
            }
            OP_PUSHDATA4 => {
                if bytes.len() < pos + 5 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length = u32::from_le_bytes([
                    bytes[pos + 1],
                    bytes[pos + 2],
                    bytes[pos + 3],
                    bytes[pos + 4],
                ]) as usize;
                pos += 5;
                if bytes.len() < pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = bytes[pos..pos + length].to_vec();
                chunks.push(ScriptChunk { op, data: Some(data) });
                pos += length;
            }
            0x01..=0x4b => {
                // Direct push: op byte is the number of bytes to push.
                let length = op as usize;
                if bytes.len() < pos + 1 + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = bytes[pos + 1..pos + 1 + length].to_vec();
                chunks.push(ScriptChunk { op, data: Some(data) });
                pos += 1 + length;
            }
            _ => {
                chunks.push(ScriptChunk { op, data: None });
                pos += 1;
            }
        }
    }

    Ok(chunks)
}

/// Serialize a chunk sequence back to raw script bytes.
///
/// Inverse of `decode_script`: every decoded script re-encodes to its
/// original bytes because each chunk keeps its push prefix.
pub fn encode_script(chunks: &[ScriptChunk]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for chunk in chunks {
        bytes.extend_from_slice(&chunk.to_bytes());
    }
    bytes
}

/// Check if every chunk in a script is a push operation.
pub fn is_push_only(chunks: &[ScriptChunk]) -> bool {
    chunks.iter().all(|c| c.op <= OP_16)
}

/// Remove canonical pushes whose payload equals the given data.
///
/// This is the signature-scrubbing step of legacy signature checks: any
/// push of exactly the signature bytes is dropped from the subscript
/// before hashing. Empty data matches nothing.
pub fn remove_data_pushes(chunks: &[ScriptChunk], data: &[u8]) -> Vec<ScriptChunk> {
    if data.is_empty() {
        return chunks.to_vec();
    }
    chunks
        .iter()
        .filter(|c| !c.canonical_push() || c.bytes() != data)
        .cloned()
        .collect()
}

/// Remove all occurrences of a specific opcode.
pub fn remove_opcode(chunks: &[ScriptChunk], opcode: u8) -> Vec<ScriptChunk> {
    chunks.iter().filter(|c| c.op != opcode).cloned().collect()
}

/// Compute the OP_PUSHDATA prefix bytes for a data payload of the given length.
///
/// Returns the prefix that should be prepended to the data when encoding
/// a push operation into raw script bytes.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>, ScriptError> {
    if data_len <= 75 {
        Ok(vec![data_len as u8])
    } else if data_len <= 0xFF {
        Ok(vec![OP_PUSHDATA1, data_len as u8])
    } else if data_len <= 0xFFFF {
        let mut buf = vec![OP_PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        Ok(buf)
    } else if data_len <= 0xFFFFFFFF {
        let mut buf = vec![OP_PUSHDATA4];
        buf.extend_from_slice(&(data_len as u32).to_le_bytes());
        Ok(buf)
    } else {
        Err(ScriptError::DataTooBig)
    }
}

/// Encode multiple data payloads into a single byte vector with push prefixes.
///
/// Each element in `parts` gets its own OP_PUSHDATA prefix based on length.
pub fn encode_push_datas(parts: &[&[u8]]) -> Result<Vec<u8>, ScriptError> {
    let mut result = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        let prefix = push_data_prefix(part.len()).map_err(|_| ScriptError::PartTooBig(i))?;
        result.extend_from_slice(&prefix);
        result.extend_from_slice(part);
    }
    Ok(result)
}
