//! Stack manipulation operations. Most of these are thin wrappers over
//! the generic n-ary helpers on [`Stack`](super::stack::Stack).

use crate::chunk::ScriptChunk;

use super::context::ExecutionContext;
use super::error::{InterpreterError, InterpreterErrorCode};
use super::scriptnum::ScriptNumber;

pub(super) fn op_to_alt_stack(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let so = ctx.dstack.pop_byte_array()?;
    ctx.astack.push_byte_array(so);
    Ok(())
}

pub(super) fn op_from_alt_stack(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    if ctx.astack.depth() < 1 {
        return Err(InterpreterError::new(
            InterpreterErrorCode::InvalidStackOperation,
            "alt stack is empty".to_string(),
        ));
    }
    let so = ctx.astack.pop_byte_array()?;
    ctx.dstack.push_byte_array(so);
    Ok(())
}

pub(super) fn op_ifdup(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let so = ctx.dstack.peek_byte_array(0)?;
    if super::stack::as_bool(&so) {
        ctx.dstack.push_byte_array(so);
    }
    Ok(())
}

pub(super) fn op_depth(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let depth = ctx.dstack.depth();
    ctx.dstack.push_int(&ScriptNumber::new(depth as i64));
    Ok(())
}

pub(super) fn op_drop(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.drop_n(1)
}

pub(super) fn op_2drop(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.drop_n(2)
}

pub(super) fn op_dup(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.dup_n(1)
}

pub(super) fn op_2dup(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.dup_n(2)
}

pub(super) fn op_3dup(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.dup_n(3)
}

pub(super) fn op_nip(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.nip_n_discard(1)
}

pub(super) fn op_over(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.over_n(1)
}

pub(super) fn op_2over(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.over_n(2)
}

pub(super) fn op_pick(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let n = ctx.dstack.pop_int()?;
    ctx.dstack.pick_n(n.to_i32())
}

pub(super) fn op_roll(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let n = ctx.dstack.pop_int()?;
    ctx.dstack.roll_n(n.to_i32())
}

pub(super) fn op_rot(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.rot_n(1)
}

pub(super) fn op_2rot(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.rot_n(2)
}

pub(super) fn op_swap(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.swap_n(1)
}

pub(super) fn op_2swap(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.swap_n(2)
}

pub(super) fn op_tuck(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.dstack.tuck()
}
