//! Numeric operations. Operands are decoded through [`ScriptNumber`],
//! which enforces the interpreter's number-length limit on the way in.

use crate::chunk::ScriptChunk;

use super::context::ExecutionContext;
use super::error::{InterpreterError, InterpreterErrorCode};
use super::scriptnum::ScriptNumber;

pub(super) fn op_1add(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let mut n = ctx.dstack.pop_int()?;
    ctx.dstack.push_int(n.incr());
    Ok(())
}

pub(super) fn op_1sub(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let mut n = ctx.dstack.pop_int()?;
    ctx.dstack.push_int(n.decr());
    Ok(())
}

pub(super) fn op_negate(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let mut n = ctx.dstack.pop_int()?;
    ctx.dstack.push_int(n.neg());
    Ok(())
}

pub(super) fn op_abs(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let mut n = ctx.dstack.pop_int()?;
    ctx.dstack.push_int(n.abs());
    Ok(())
}

pub(super) fn op_not(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let n = ctx.dstack.pop_int()?;
    let r = if n.is_zero() { 1 } else { 0 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_0notequal(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let n = ctx.dstack.pop_int()?;
    let r = if n.is_zero() { 0 } else { 1 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_add(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let mut v0 = ctx.dstack.pop_int()?;
    ctx.dstack.push_int(v0.add(&v1));
    Ok(())
}

pub(super) fn op_sub(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let mut v0 = ctx.dstack.pop_int()?;
    ctx.dstack.push_int(v0.sub(&v1));
    Ok(())
}

pub(super) fn op_booland(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let r = if !v0.is_zero() && !v1.is_zero() { 1 } else { 0 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_boolor(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let r = if !v0.is_zero() || !v1.is_zero() { 1 } else { 0 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_numequal(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let r = if v0.equal(&v1) { 1 } else { 0 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_numequalverify(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    op_numequal(ctx, chunk)?;
    ctx.abstract_verify(chunk, InterpreterErrorCode::NumEqualVerify)
}

pub(super) fn op_numnotequal(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let r = if v0.equal(&v1) { 0 } else { 1 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_lessthan(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let r = if v0.less_than(&v1) { 1 } else { 0 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_greaterthan(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let r = if v0.greater_than(&v1) { 1 } else { 0 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_lessthanorequal(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let r = if v0.less_than_or_equal(&v1) { 1 } else { 0 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_greaterthanorequal(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let r = if v0.greater_than_or_equal(&v1) { 1 } else { 0 };
    ctx.dstack.push_int(&ScriptNumber::new(r));
    Ok(())
}

pub(super) fn op_min(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let n = if v0.less_than(&v1) { v0 } else { v1 };
    ctx.dstack.push_int(&n);
    Ok(())
}

pub(super) fn op_max(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let v1 = ctx.dstack.pop_int()?;
    let v0 = ctx.dstack.pop_int()?;
    let n = if v0.greater_than(&v1) { v0 } else { v1 };
    ctx.dstack.push_int(&n);
    Ok(())
}

pub(super) fn op_within(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let max = ctx.dstack.pop_int()?;
    let min = ctx.dstack.pop_int()?;
    let x = ctx.dstack.pop_int()?;
    let r = x.greater_than_or_equal(&min) && x.less_than(&max);
    ctx.dstack.push_bool(r);
    Ok(())
}
