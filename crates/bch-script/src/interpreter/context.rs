//! Execution context - the core interpreter state machine.

use crate::chunk::ScriptChunk;
use crate::opcodes::*;

use super::config::Config;
use super::error::{InterpreterError, InterpreterErrorCode};
use super::registry;
use super::stack::{BoolStack, Stack};
use super::TxContext;

/// Conditional execution constants.
pub(crate) const OP_COND_FALSE: i32 = 0;
pub(crate) const OP_COND_TRUE: i32 = 1;
pub(crate) const OP_COND_SKIP: i32 = 2;

/// Mutable state threaded through every opcode handler.
///
/// One context is shared across the unlocking, locking, and (for P2SH)
/// redeem script runs of a single input; the data stack carries over
/// between runs while the per-script counters reset.
pub struct ExecutionContext<'a> {
    /// The main data stack used during script execution.
    pub dstack: Stack,
    /// The alternate stack used by OP_TOALTSTACK and OP_FROMALTSTACK.
    pub astack: Stack,
    /// Stack tracking whether an OP_ELSE was already seen per IF level.
    pub else_stack: BoolStack,
    /// Stack of conditional execution flags for nested IF/ELSE blocks.
    pub cond_stack: Vec<i32>,
    /// Execution limits and policy for this run.
    pub cfg: Config,
    /// The chunks of the currently executing script.
    pub chunks: Vec<ScriptChunk>,
    /// Index of the currently executing chunk.
    pub pc: usize,
    /// Index of the most recent executed OP_CODESEPARATOR, if any.
    pub last_code_sep: Option<usize>,
    /// Running count of non-push opcodes executed (checked against max_ops).
    pub num_ops: usize,
    /// Optional transaction context for signature verification.
    pub tx_context: Option<&'a dyn TxContext>,
    /// The transaction input index being verified.
    pub input_idx: usize,
}

impl<'a> ExecutionContext<'a> {
    /// Create a fresh context with empty stacks.
    pub fn new(cfg: Config, tx_context: Option<&'a dyn TxContext>, input_idx: usize) -> Self {
        let max_num_len = cfg.max_num_length;
        ExecutionContext {
            dstack: Stack::new(max_num_len),
            astack: Stack::new(max_num_len),
            else_stack: BoolStack::new(),
            cond_stack: Vec::new(),
            cfg,
            chunks: Vec::new(),
            pc: 0,
            last_code_sep: None,
            num_ops: 0,
            tx_context,
            input_idx,
        }
    }

    /// Return true if the current conditional branch is executing.
    pub fn is_branch_executing(&self) -> bool {
        match self.cond_stack.last() {
            None => true,
            Some(&v) => v == OP_COND_TRUE,
        }
    }

    /// Execute one script to completion.
    ///
    /// The data stack persists from any previous run; the operation
    /// counter, code separator bookmark, and alt stack do not.
    pub fn run_script(&mut self, chunks: Vec<ScriptChunk>) -> Result<(), InterpreterError> {
        self.chunks = chunks;
        self.pc = 0;
        self.num_ops = 0;
        self.last_code_sep = None;

        while self.pc < self.chunks.len() {
            let chunk = self.chunks[self.pc].clone();
            self.execute_opcode(&chunk)?;
            self.pc += 1;

            let combined = self.dstack.depth() + self.astack.depth();
            if combined > self.cfg.max_stack_size as i32 {
                return Err(InterpreterError::new(
                    InterpreterErrorCode::StackOverflow,
                    format!(
                        "combined stack size {} > max allowed {}",
                        combined, self.cfg.max_stack_size
                    ),
                ));
            }
        }

        // End of script - conditionals must be closed
        if !self.cond_stack.is_empty() {
            return Err(InterpreterError::new(
                InterpreterErrorCode::UnbalancedConditional,
                "end of script reached in conditional execution".to_string(),
            ));
        }

        // Alt stack doesn't persist between scripts
        self.astack.clear();

        Ok(())
    }

    fn execute_opcode(&mut self, chunk: &ScriptChunk) -> Result<(), InterpreterError> {
        // Element size check
        if chunk.bytes().len() > self.cfg.max_element_size {
            return Err(InterpreterError::new(
                InterpreterErrorCode::ElementTooBig,
                format!(
                    "element size {} exceeds max allowed size {}",
                    chunk.bytes().len(),
                    self.cfg.max_element_size
                ),
            ));
        }

        // Disabled opcodes fail on sight, executing branch or not
        if chunk.is_disabled() {
            return Err(InterpreterError::new(
                InterpreterErrorCode::DisabledOpcode,
                format!("attempt to execute disabled opcode {}", chunk.name()),
            ));
        }

        // Always-illegal opcodes
        if chunk.always_illegal() {
            return Err(InterpreterError::new(
                InterpreterErrorCode::ReservedOpcode,
                format!("attempt to execute reserved opcode {}", chunk.name()),
            ));
        }

        // Count non-push operations
        if chunk.op > OP_16 {
            self.num_ops += 1;
            if self.num_ops > self.cfg.max_ops_per_script {
                return Err(InterpreterError::new(
                    InterpreterErrorCode::TooManyOperations,
                    format!("exceeded max operation limit of {}", self.cfg.max_ops_per_script),
                ));
            }
        }

        // Not executing and not conditional => skip
        if !self.is_branch_executing() && !chunk.is_conditional() {
            return Ok(());
        }

        (registry::entry(chunk.op).exec)(self, chunk)
    }

    /// Bump the operation counter by `n` (CHECKMULTISIG key accounting).
    pub(crate) fn add_ops(&mut self, n: usize) -> Result<(), InterpreterError> {
        self.num_ops += n;
        if self.num_ops > self.cfg.max_ops_per_script {
            return Err(InterpreterError::new(
                InterpreterErrorCode::TooManyOperations,
                format!("exceeded max operation limit of {}", self.cfg.max_ops_per_script),
            ));
        }
        Ok(())
    }

    /// The subscript used for signature hashing: everything after the most
    /// recent OP_CODESEPARATOR, or the whole script if none was executed.
    pub(crate) fn sub_script(&self) -> Vec<ScriptChunk> {
        let skip = match self.last_code_sep {
            Some(idx) => idx + 1,
            None => 0,
        };
        self.chunks[skip..].to_vec()
    }

    /// Pop the top stack entry if it is true; error with `code` and leave
    /// it in place if it is false.
    pub(crate) fn abstract_verify(
        &mut self,
        chunk: &ScriptChunk,
        code: InterpreterErrorCode,
    ) -> Result<(), InterpreterError> {
        let verified = self.dstack.peek_bool(0)?;
        if !verified {
            return Err(InterpreterError::new(code, format!("{} failed", chunk.name())));
        }
        self.dstack.drop_n(1)
    }

    /// Final stack check at the end of a script sequence: the stack must
    /// hold a true value on top.
    pub fn check_error_condition(&mut self) -> Result<(), InterpreterError> {
        if self.dstack.depth() < 1 {
            return Err(InterpreterError::new(
                InterpreterErrorCode::EmptyStack,
                "stack empty at end of script execution".to_string(),
            ));
        }

        let v = self.dstack.pop_bool()?;
        if !v {
            return Err(InterpreterError::new(
                InterpreterErrorCode::EvalFalse,
                "false stack entry at end of script execution".to_string(),
            ));
        }

        Ok(())
    }
}
