//! Full script verification: unlocking script, locking script, and the
//! pay-to-script-hash redeem phase when it applies.

use crate::chunk::{decode_script, is_push_only, ScriptChunk};
use crate::script::Script;

use super::config::Config;
use super::context::ExecutionContext;
use super::error::{InterpreterError, InterpreterErrorCode};
use super::TxContext;

fn decode_or_malformed(script: &Script) -> Result<Vec<ScriptChunk>, InterpreterError> {
    decode_script(&script.to_bytes()).map_err(|e| {
        InterpreterError::new(
            InterpreterErrorCode::MalformedPush,
            format!("failed to parse script: {}", e),
        )
    })
}

/// Verify that `unlock` satisfies `lock` under the given configuration.
///
/// The unlocking script runs first, then the locking script against the
/// surviving stack. When the locking script is pay-to-script-hash and P2SH
/// is active, the last unlocking push is deserialized and run as a third
/// script against the stack the unlocking script left behind.
pub fn verify_scripts(
    unlock: &Script,
    lock: &Script,
    cfg: &Config,
    tx_context: Option<&dyn TxContext>,
    input_idx: usize,
) -> Result<(), InterpreterError> {
    if unlock.len() > cfg.max_script_size || lock.len() > cfg.max_script_size {
        return Err(InterpreterError::new(
            InterpreterErrorCode::ScriptTooBig,
            format!(
                "script size exceeds maximum of {} bytes",
                cfg.max_script_size
            ),
        ));
    }
    if unlock.is_empty() && lock.is_empty() {
        return Err(InterpreterError::new(
            InterpreterErrorCode::EvalFalse,
            "both scripts are empty".to_string(),
        ));
    }

    let unlock_chunks = decode_or_malformed(unlock)?;
    let lock_chunks = decode_or_malformed(lock)?;

    let p2sh = lock.is_p2sh() && cfg.p2sh_active();
    if p2sh && !is_push_only(&unlock_chunks) {
        return Err(InterpreterError::new(
            InterpreterErrorCode::NotPushOnly,
            "unlocking script for p2sh must be push only".to_string(),
        ));
    }

    let mut ctx = ExecutionContext::new(cfg.clone(), tx_context, input_idx);

    if !unlock_chunks.is_empty() {
        ctx.run_script(unlock_chunks)?;
    }

    // The stack as left by the unlocking script, needed again for the
    // redeem phase.
    let saved_stack = if p2sh {
        Some(ctx.dstack.get_stack())
    } else {
        None
    };

    ctx.run_script(lock_chunks)?;
    ctx.check_error_condition()?;

    if let Some(mut stack) = saved_stack {
        let redeem_bytes = stack.pop().ok_or_else(|| {
            InterpreterError::new(
                InterpreterErrorCode::EmptyStack,
                "no redeem script on stack".to_string(),
            )
        })?;
        ctx.dstack.set_stack(stack);
        let redeem_chunks = decode_or_malformed(&Script::from_bytes(&redeem_bytes))?;
        ctx.run_script(redeem_chunks)?;
        ctx.check_error_condition()?;
    }

    Ok(())
}
