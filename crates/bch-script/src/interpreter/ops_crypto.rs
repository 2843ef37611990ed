//! Hashing and signature checking operations.

use bch_primitives::hash;

use crate::chunk::{remove_data_pushes, remove_opcode, ScriptChunk};
use crate::opcodes::OP_CODESEPARATOR;
use crate::script::Script;

use super::context::ExecutionContext;
use super::error::{InterpreterError, InterpreterErrorCode};

const SIGHASH_BASE_MASK: u32 = 0x1f;
const SIGHASH_FORKID: u32 = 0x40;

pub(super) fn op_ripemd160(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let so = ctx.dstack.pop_byte_array()?;
    ctx.dstack.push_byte_array(hash::ripemd160(&so).to_vec());
    Ok(())
}

pub(super) fn op_sha1(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let so = ctx.dstack.pop_byte_array()?;
    ctx.dstack.push_byte_array(hash::sha1(&so).to_vec());
    Ok(())
}

pub(super) fn op_sha256(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let so = ctx.dstack.pop_byte_array()?;
    ctx.dstack.push_byte_array(hash::sha256(&so).to_vec());
    Ok(())
}

pub(super) fn op_hash160(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let so = ctx.dstack.pop_byte_array()?;
    ctx.dstack.push_byte_array(hash::hash160(&so).to_vec());
    Ok(())
}

pub(super) fn op_hash256(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let so = ctx.dstack.pop_byte_array()?;
    ctx.dstack.push_byte_array(hash::sha256d(&so).to_vec());
    Ok(())
}

pub(super) fn op_codeseparator(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.last_code_sep = Some(ctx.pc);
    Ok(())
}

fn sighash_base(full_sig: &[u8]) -> u32 {
    match full_sig.last() {
        Some(b) => *b as u32 & SIGHASH_BASE_MASK,
        None => 0,
    }
}

/// Build the scrubbed script that signatures commit to. Before the fork id
/// scheme, the signature itself and any OP_CODESEPARATOR are deleted from
/// the code being signed.
fn signed_sub_script(ctx: &ExecutionContext, full_sig: &[u8]) -> Script {
    let mut chunks = ctx.sub_script();
    let has_fork_id = match full_sig.last() {
        Some(b) => *b as u32 & SIGHASH_FORKID != 0,
        None => false,
    };
    if !has_fork_id {
        chunks = remove_data_pushes(&chunks, full_sig);
        chunks = remove_opcode(&chunks, OP_CODESEPARATOR);
    }
    Script::from_chunks(&chunks)
}

pub(super) fn op_checksig(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let pub_key_bytes = ctx.dstack.pop_byte_array()?;
    let full_sig_bytes = ctx.dstack.pop_byte_array()?;

    if full_sig_bytes.is_empty() {
        ctx.dstack.push_bool(false);
        return Ok(());
    }

    let shf = *full_sig_bytes.last().ok_or_else(|| {
        InterpreterError::new(
            InterpreterErrorCode::InvalidSigHashType,
            "signature has no hash type byte".to_string(),
        )
    })? as u32;
    if ctx.cfg.reject_unknown_sighash_base && !(1..=3).contains(&sighash_base(&full_sig_bytes)) {
        return Err(InterpreterError::new(
            InterpreterErrorCode::InvalidSigHashType,
            format!("unknown sig hash base in type 0x{:02x}", shf),
        ));
    }

    let tx_context = ctx.tx_context.ok_or_else(|| {
        InterpreterError::new(
            InterpreterErrorCode::MissingTxContext,
            "no tx context for checksig".to_string(),
        )
    })?;

    let script = signed_sub_script(ctx, &full_sig_bytes);
    let valid = tx_context
        .check_signature(&full_sig_bytes, &pub_key_bytes, &script, ctx.input_idx, shf)
        .unwrap_or(false);
    ctx.dstack.push_bool(valid);
    Ok(())
}

pub(super) fn op_checksigverify(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    op_checksig(ctx, chunk)?;
    ctx.abstract_verify(chunk, InterpreterErrorCode::CheckSigVerify)
}

pub(super) fn op_checkmultisig(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let num_keys = ctx.dstack.pop_int()?.to_i32();
    if num_keys < 0 {
        return Err(InterpreterError::new(
            InterpreterErrorCode::InvalidPubKeyCount,
            format!("number of pubkeys {} is negative", num_keys),
        ));
    }
    if num_keys as usize > ctx.cfg.max_multisig_keys {
        return Err(InterpreterError::new(
            InterpreterErrorCode::InvalidPubKeyCount,
            format!(
                "too many pubkeys: {} > {}",
                num_keys, ctx.cfg.max_multisig_keys
            ),
        ));
    }
    let num_pub_keys = num_keys as usize;
    ctx.add_ops(num_pub_keys)?;

    let mut pub_keys = Vec::with_capacity(num_pub_keys);
    for _ in 0..num_pub_keys {
        pub_keys.push(ctx.dstack.pop_byte_array()?);
    }

    let num_sigs = ctx.dstack.pop_int()?.to_i32();
    if num_sigs < 0 || num_sigs as usize > num_pub_keys {
        return Err(InterpreterError::new(
            InterpreterErrorCode::InvalidSignatureCount,
            format!(
                "number of signatures {} is invalid for {} pubkeys",
                num_sigs, num_pub_keys
            ),
        ));
    }
    let num_signatures = num_sigs as usize;
    let mut signatures = Vec::with_capacity(num_signatures);
    for _ in 0..num_signatures {
        signatures.push(ctx.dstack.pop_byte_array()?);
    }

    // Extra item consumed but ignored, matching the original protocol bug.
    ctx.dstack.pop_byte_array()?;

    let tx_context = ctx.tx_context.ok_or_else(|| {
        InterpreterError::new(
            InterpreterErrorCode::MissingTxContext,
            "no tx context for checkmultisig".to_string(),
        )
    })?;

    let mut chunks = ctx.sub_script();
    for sig in &signatures {
        chunks = remove_data_pushes(&chunks, sig);
    }
    chunks = remove_opcode(&chunks, OP_CODESEPARATOR);
    let script = Script::from_chunks(&chunks);

    // Signatures must match pubkeys in order; keys are consumed as we go.
    let mut success = true;
    let mut remaining_keys = num_pub_keys as i32 + 1;
    let mut pub_key_idx: i32 = -1;
    let mut sig_idx = 0usize;
    let mut remaining_sigs = num_signatures as i32;
    while remaining_sigs > 0 {
        pub_key_idx += 1;
        remaining_keys -= 1;
        if remaining_sigs > remaining_keys {
            success = false;
            break;
        }

        let full_sig_bytes = &signatures[sig_idx];
        if full_sig_bytes.is_empty() {
            continue;
        }
        let shf = match full_sig_bytes.last() {
            Some(b) => *b as u32,
            None => continue,
        };
        if ctx.cfg.reject_unknown_sighash_base && !(1..=3).contains(&sighash_base(full_sig_bytes))
        {
            return Err(InterpreterError::new(
                InterpreterErrorCode::InvalidSigHashType,
                format!("unknown sig hash base in type 0x{:02x}", shf),
            ));
        }

        let pub_key_bytes = &pub_keys[pub_key_idx as usize];
        let valid = tx_context
            .check_signature(full_sig_bytes, pub_key_bytes, &script, ctx.input_idx, shf)
            .unwrap_or(false);
        if valid {
            sig_idx += 1;
            remaining_sigs -= 1;
        }
    }

    ctx.dstack.push_bool(success);
    Ok(())
}

pub(super) fn op_checkmultisigverify(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    op_checkmultisig(ctx, chunk)?;
    ctx.abstract_verify(chunk, InterpreterErrorCode::CheckMultiSigVerify)
}
