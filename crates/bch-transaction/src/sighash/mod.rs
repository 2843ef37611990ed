//! Signature hash computation.
//!
//! Two algorithms live here. The legacy algorithm serializes a modified
//! copy of the whole transaction; the fork id algorithm (BIP143 layout)
//! hashes a fixed-order preimage built from precomputed digests. The fork
//! id bit in the hash type selects between them.

use bch_primitives::hash::sha256d;
use bch_primitives::util::{ByteWriter, VarInt};
use bch_script::opcodes::OP_CODESEPARATOR;
use bch_script::Script;

use crate::error::TransactionError;
use crate::transaction::Transaction;

pub const SIGHASH_ALL: u32 = 0x01;
pub const SIGHASH_NONE: u32 = 0x02;
pub const SIGHASH_SINGLE: u32 = 0x03;
pub const SIGHASH_FORKID: u32 = 0x40;
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;
pub const SIGHASH_BASE_MASK: u32 = 0x1f;

/// A signature hash type byte with accessors for its flag bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SighashType(pub u32);

impl SighashType {
    /// The base mode in the low five bits (ALL, NONE, or SINGLE).
    pub fn base(self) -> u32 {
        self.0 & SIGHASH_BASE_MASK
    }

    /// True when the fork id bit selects the BIP143 algorithm.
    pub fn has_forkid(self) -> bool {
        self.0 & SIGHASH_FORKID != 0
    }

    /// True when the signature commits to the signing input only.
    pub fn anyone_can_pay(self) -> bool {
        self.0 & SIGHASH_ANYONECANPAY != 0
    }

    /// True when the base mode is one of the three defined values.
    pub fn has_standard_base(self) -> bool {
        (SIGHASH_ALL..=SIGHASH_SINGLE).contains(&self.base())
    }
}

impl From<u32> for SighashType {
    fn from(raw: u32) -> Self {
        SighashType(raw)
    }
}

/// Digest returned by the legacy algorithm when the input index is out of
/// range or SIGHASH_SINGLE has no matching output. Historical behavior
/// that signers must reproduce exactly.
fn one_hash() -> [u8; 32] {
    let mut digest = [0u8; 32];
    digest[0] = 0x01;
    digest
}

/// Compute the digest a signature over `tx` input `input_index` commits
/// to. `sub_script` is the previous output's locking script (or the
/// redeem script for P2SH); `prev_value` is only used by the fork id
/// algorithm.
pub fn signature_hash(
    tx: &Transaction,
    input_index: usize,
    sub_script: &Script,
    prev_value: u64,
    hash_type: u32,
) -> Result<[u8; 32], TransactionError> {
    if SighashType(hash_type).has_forkid() {
        bip143_digest(tx, input_index, sub_script, prev_value, hash_type)
    } else {
        legacy_digest(tx, input_index, sub_script, hash_type)
    }
}

/// Legacy digest: serialize the transaction with scripts blanked per the
/// sighash mode, append the hash type, and double hash.
pub fn legacy_digest(
    tx: &Transaction,
    input_index: usize,
    sub_script: &Script,
    hash_type: u32,
) -> Result<[u8; 32], TransactionError> {
    let sighash = SighashType(hash_type);
    let base = sighash.base();
    let anyone_can_pay = sighash.anyone_can_pay();

    if input_index >= tx.inputs.len() {
        return Ok(one_hash());
    }
    if base == SIGHASH_SINGLE && input_index >= tx.outputs.len() {
        return Ok(one_hash());
    }

    let script_code = sub_script.delete_opcode_occurrences(OP_CODESEPARATOR)?;
    let script_code_bytes = script_code.to_bytes();

    let mut writer = ByteWriter::new();
    writer.write_u32_le(tx.version);

    if anyone_can_pay {
        let input = &tx.inputs[input_index];
        writer.write_varint(VarInt::from(1usize));
        input.outpoint.write_to(&mut writer);
        writer.write_varbytes(&script_code_bytes);
        writer.write_u32_le(input.sequence);
    } else {
        writer.write_varint(VarInt::from(tx.inputs.len()));
        for (i, input) in tx.inputs.iter().enumerate() {
            input.outpoint.write_to(&mut writer);
            if i == input_index {
                writer.write_varbytes(&script_code_bytes);
                writer.write_u32_le(input.sequence);
            } else {
                writer.write_varbytes(&[]);
                let sequence = if base == SIGHASH_NONE || base == SIGHASH_SINGLE {
                    0
                } else {
                    input.sequence
                };
                writer.write_u32_le(sequence);
            }
        }
    }

    match base {
        SIGHASH_NONE => {
            writer.write_varint(VarInt::from(0usize));
        }
        SIGHASH_SINGLE => {
            // Outputs below the signing index become zero-value blanks;
            // outputs above it are dropped entirely.
            writer.write_varint(VarInt::from(input_index + 1));
            for _ in 0..input_index {
                writer.write_u64_le(0);
                writer.write_varbytes(&[]);
            }
            tx.outputs[input_index].write_to(&mut writer);
        }
        _ => {
            writer.write_varint(VarInt::from(tx.outputs.len()));
            for output in &tx.outputs {
                output.write_to(&mut writer);
            }
        }
    }

    writer.write_u32_le(tx.lock_time);
    writer.write_u32_le(hash_type);
    Ok(sha256d(writer.as_bytes()))
}

/// Fork id digest over the BIP143 preimage layout.
pub fn bip143_digest(
    tx: &Transaction,
    input_index: usize,
    sub_script: &Script,
    prev_value: u64,
    hash_type: u32,
) -> Result<[u8; 32], TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InputOutOfRange(input_index));
    }
    let sighash = SighashType(hash_type);
    let base = sighash.base();
    let anyone_can_pay = sighash.anyone_can_pay();
    let input = &tx.inputs[input_index];

    let hash_prevouts = if anyone_can_pay {
        [0u8; 32]
    } else {
        let mut writer = ByteWriter::new();
        for input in &tx.inputs {
            input.outpoint.write_to(&mut writer);
        }
        sha256d(writer.as_bytes())
    };

    let hash_sequence =
        if anyone_can_pay || base == SIGHASH_SINGLE || base == SIGHASH_NONE {
            [0u8; 32]
        } else {
            let mut writer = ByteWriter::new();
            for input in &tx.inputs {
                writer.write_u32_le(input.sequence);
            }
            sha256d(writer.as_bytes())
        };

    let hash_outputs = if base != SIGHASH_SINGLE && base != SIGHASH_NONE {
        let mut writer = ByteWriter::new();
        for output in &tx.outputs {
            output.write_to(&mut writer);
        }
        sha256d(writer.as_bytes())
    } else if base == SIGHASH_SINGLE && input_index < tx.outputs.len() {
        let mut writer = ByteWriter::new();
        tx.outputs[input_index].write_to(&mut writer);
        sha256d(writer.as_bytes())
    } else {
        [0u8; 32]
    };

    let mut writer = ByteWriter::new();
    writer.write_u32_le(tx.version);
    writer.write_bytes(&hash_prevouts);
    writer.write_bytes(&hash_sequence);
    input.outpoint.write_to(&mut writer);
    writer.write_varbytes(&sub_script.to_bytes());
    writer.write_u64_le(prev_value);
    writer.write_u32_le(input.sequence);
    writer.write_bytes(&hash_outputs);
    writer.write_u32_le(tx.lock_time);
    writer.write_u32_le(hash_type);
    Ok(sha256d(writer.as_bytes()))
}
