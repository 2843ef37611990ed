//! Flow control operations for the script interpreter.

use crate::chunk::ScriptChunk;

use super::context::{ExecutionContext, OP_COND_FALSE, OP_COND_SKIP, OP_COND_TRUE};
use super::error::{InterpreterError, InterpreterErrorCode};

pub(super) fn op_nop(
    _ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    Ok(())
}

pub(super) fn op_reserved(
    _ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    Err(InterpreterError::new(
        InterpreterErrorCode::ReservedOpcode,
        format!("attempt to execute reserved opcode {}", chunk.name()),
    ))
}

pub(super) fn op_invalid(
    _ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    Err(InterpreterError::new(
        InterpreterErrorCode::ReservedOpcode,
        format!("attempt to execute invalid opcode {}", chunk.name()),
    ))
}

pub(super) fn op_disabled(
    _ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    Err(InterpreterError::new(
        InterpreterErrorCode::DisabledOpcode,
        format!("attempt to execute disabled opcode {}", chunk.name()),
    ))
}

pub(super) fn op_if(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let cond_val = if ctx.is_branch_executing() {
        if ctx.dstack.pop_bool()? {
            OP_COND_TRUE
        } else {
            OP_COND_FALSE
        }
    } else {
        OP_COND_SKIP
    };
    ctx.cond_stack.push(cond_val);
    ctx.else_stack.push_bool(false);
    Ok(())
}

pub(super) fn op_notif(
    ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    let cond_val = if ctx.is_branch_executing() {
        if ctx.dstack.pop_bool()? {
            OP_COND_FALSE
        } else {
            OP_COND_TRUE
        }
    } else {
        OP_COND_SKIP
    };
    ctx.cond_stack.push(cond_val);
    ctx.else_stack.push_bool(false);
    Ok(())
}

pub(super) fn op_else(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    if ctx.cond_stack.is_empty() {
        return Err(InterpreterError::new(
            InterpreterErrorCode::UnbalancedConditional,
            format!(
                "encountered opcode {} with no matching opcode to begin conditional execution",
                chunk.name()
            ),
        ));
    }

    // A second OP_ELSE on the same level is malformed
    let seen_else = ctx.else_stack.pop_bool()?;
    if seen_else {
        return Err(InterpreterError::new(
            InterpreterErrorCode::UnbalancedConditional,
            format!(
                "encountered opcode {} with no matching opcode to begin conditional execution",
                chunk.name()
            ),
        ));
    }

    let idx = ctx.cond_stack.len() - 1;
    match ctx.cond_stack[idx] {
        OP_COND_TRUE => ctx.cond_stack[idx] = OP_COND_FALSE,
        OP_COND_FALSE => ctx.cond_stack[idx] = OP_COND_TRUE,
        _ => {} // OP_COND_SKIP stays
    }

    ctx.else_stack.push_bool(true);
    Ok(())
}

pub(super) fn op_endif(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    if ctx.cond_stack.is_empty() {
        return Err(InterpreterError::new(
            InterpreterErrorCode::UnbalancedConditional,
            format!(
                "encountered opcode {} with no matching opcode to begin conditional execution",
                chunk.name()
            ),
        ));
    }
    ctx.cond_stack.pop();
    ctx.else_stack.pop_bool()?;
    Ok(())
}

pub(super) fn op_verify(
    ctx: &mut ExecutionContext,
    chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    ctx.abstract_verify(chunk, InterpreterErrorCode::Verify)
}

pub(super) fn op_return(
    _ctx: &mut ExecutionContext,
    _chunk: &ScriptChunk,
) -> Result<(), InterpreterError> {
    Err(InterpreterError::new(
        InterpreterErrorCode::EarlyReturn,
        "script returned early".to_string(),
    ))
}
