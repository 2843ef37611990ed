//! Data push and comparison operations.

use crate::chunk::ScriptChunk;
use crate::opcodes::{OP_1, OP_16};

use super::context::ExecutionContext;
use super::error::{InterpreterError, InterpreterErrorCode};
use super::scriptnum::ScriptNumber;

pub(super) fn op_false(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.push_byte_array(vec![]);
    Ok(())
}

/// Generic handler for OP_DATA_1..OP_DATA_75 and OP_PUSHDATA1/2/4.
pub(super) fn op_push(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.push_byte_array(chunk.bytes().to_vec());
    Ok(())
}

pub(super) fn op_1negate(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.push_int(&ScriptNumber::new(-1));
    Ok(())
}

/// Generic handler for OP_1..OP_16; the value lives in the opcode byte.
pub(super) fn op_small_int(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    debug_assert!((OP_1..=OP_16).contains(&chunk.op));
    ctx.dstack.push_byte_array(vec![chunk.op - (OP_1 - 1)]);
    Ok(())
}

pub(super) fn op_size(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let so = ctx.dstack.peek_byte_array(0)?;
    ctx.dstack.push_int(&ScriptNumber::new(so.len() as i64));
    Ok(())
}

pub(super) fn op_equal(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let a = ctx.dstack.pop_byte_array()?;
    let b = ctx.dstack.pop_byte_array()?;
    ctx.dstack.push_bool(a == b);
    Ok(())
}

pub(super) fn op_equalverify(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    op_equal(ctx, chunk)?;
    ctx.abstract_verify(chunk, InterpreterErrorCode::EqualVerify)
}
