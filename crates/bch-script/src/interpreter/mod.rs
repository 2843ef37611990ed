//! Script interpreter.
//!
//! Scripts are parsed into chunks, then executed against a pair of stacks
//! by an [`ExecutionContext`]. Dispatch goes through a 256-entry table in
//! [`registry`], one row per opcode byte. [`machine::verify_scripts`] runs
//! the full unlocking/locking/redeem sequence for transaction validation.

pub mod config;
pub mod context;
pub mod error;
pub mod machine;
mod ops_arithmetic;
mod ops_crypto;
mod ops_data;
mod ops_flow;
mod ops_stack;
pub mod registry;
pub mod scriptnum;
pub mod stack;

pub use config::{Config, BIP16_ACTIVATION_TIME};
pub use context::ExecutionContext;
pub use error::{is_error_code, InterpreterError, InterpreterErrorCode};
pub use machine::verify_scripts;
pub use registry::{OpHandler, OpcodeEntry, OPCODE_TABLE};
pub use scriptnum::ScriptNumber;
pub use stack::Stack;

use crate::script::Script;

/// Transaction-level state the interpreter needs for signature checking.
///
/// The interpreter itself knows nothing about transactions; the caller
/// supplies an implementation that computes the signature hash for the
/// spending transaction and verifies the signature against it.
pub trait TxContext {
    /// Check `sig` (with its trailing hash type byte) against `pub_key`
    /// for the given subscript, input index and hash type. Returns
    /// `Ok(false)` for a well-formed but invalid signature; errors are
    /// reserved for states where no check could be performed.
    fn check_signature(
        &self,
        sig: &[u8],
        pub_key: &[u8],
        sub_script: &Script,
        input_idx: usize,
        hash_type: u32,
    ) -> Result<bool, InterpreterError>;
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::chunk::decode_script;
    use crate::opcodes::*;

    fn run_script_cfg(
        script: &Script,
        cfg: Config,
    ) -> Result<ExecutionContext<'static>, InterpreterError> {
        let chunks = decode_script(&script.to_bytes()).expect("script should parse");
        let mut ctx = ExecutionContext::new(cfg, None, 0);
        ctx.run_script(chunks)?;
        Ok(ctx)
    }

    fn run_asm(asm: &str) -> Result<ExecutionContext<'static>, InterpreterError> {
        let script = Script::from_asm(asm).expect("asm should parse");
        run_script_cfg(&script, Config::default())
    }

    fn eval_asm(asm: &str) -> Result<(), InterpreterError> {
        let mut ctx = run_asm(asm)?;
        ctx.check_error_condition()
    }

    fn assert_fails_with(result: Result<(), InterpreterError>, code: InterpreterErrorCode) {
        match result {
            Ok(()) => panic!("expected failure with {:?}", code),
            Err(e) => assert!(is_error_code(&e, code), "got {:?}: {}", e.code, e),
        }
    }

    struct AlwaysValid;

    impl TxContext for AlwaysValid {
        fn check_signature(
            &self,
            _sig: &[u8],
            _pub_key: &[u8],
            _sub_script: &Script,
            _input_idx: usize,
            _hash_type: u32,
        ) -> Result<bool, InterpreterError> {
            Ok(true)
        }
    }

    struct RecordingChecker {
        seen: RefCell<Vec<Vec<u8>>>,
    }

    impl RecordingChecker {
        fn new() -> Self {
            RecordingChecker {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl TxContext for RecordingChecker {
        fn check_signature(
            &self,
            _sig: &[u8],
            _pub_key: &[u8],
            sub_script: &Script,
            _input_idx: usize,
            _hash_type: u32,
        ) -> Result<bool, InterpreterError> {
            self.seen.borrow_mut().push(sub_script.to_bytes().to_vec());
            Ok(true)
        }
    }

    // ------------------------------------------------------------------
    // Push and comparison ops
    // ------------------------------------------------------------------

    #[test]
    fn test_op_1_op_1_op_equal() {
        eval_asm("OP_1 OP_1 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_equal_unequal_is_eval_false() {
        assert_fails_with(eval_asm("OP_1 OP_2 OP_EQUAL"), InterpreterErrorCode::EvalFalse);
    }

    #[test]
    fn test_equalverify_consumes_both_on_success() {
        let ctx = run_asm("OP_1 OP_1 OP_EQUALVERIFY").unwrap();
        assert_eq!(ctx.dstack.depth(), 0);
    }

    #[test]
    fn test_equalverify_leaves_false_on_failure() {
        let script = Script::from_asm("OP_1 OP_2 OP_EQUALVERIFY").unwrap();
        let chunks = decode_script(&script.to_bytes()).unwrap();
        let mut ctx = ExecutionContext::new(Config::default(), None, 0);
        let err = ctx.run_script(chunks).unwrap_err();
        assert!(is_error_code(&err, InterpreterErrorCode::EqualVerify));
        assert_eq!(ctx.dstack.depth(), 1);
    }

    #[test]
    fn test_push_data_and_size() {
        eval_asm("0011aabb OP_SIZE OP_4 OP_EQUALVERIFY 0011aabb OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_1negate() {
        let mut ctx = run_asm("OP_1NEGATE").unwrap();
        assert_eq!(ctx.dstack.pop_byte_array().unwrap(), vec![0x81]);
    }

    #[test]
    fn test_small_ints() {
        let mut ctx = run_asm("OP_16").unwrap();
        assert_eq!(ctx.dstack.pop_byte_array().unwrap(), vec![16]);
    }

    // ------------------------------------------------------------------
    // Flow control
    // ------------------------------------------------------------------

    #[test]
    fn test_op_if_taken_branch() {
        eval_asm("OP_1 OP_IF OP_2 OP_ELSE OP_3 OP_ENDIF OP_2 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_if_else_branch() {
        eval_asm("OP_0 OP_IF OP_2 OP_ELSE OP_3 OP_ENDIF OP_3 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_notif() {
        eval_asm("OP_0 OP_NOTIF OP_5 OP_ENDIF OP_5 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_nested_skipped_branch_does_not_execute() {
        eval_asm("OP_0 OP_IF OP_1 OP_IF OP_RETURN OP_ENDIF OP_ENDIF OP_1").unwrap();
    }

    #[test]
    fn test_op_return_fails_when_executed() {
        assert_fails_with(eval_asm("OP_1 OP_RETURN"), InterpreterErrorCode::EarlyReturn);
    }

    #[test]
    fn test_unbalanced_if() {
        assert_fails_with(
            eval_asm("OP_1 OP_IF OP_1"),
            InterpreterErrorCode::UnbalancedConditional,
        );
    }

    #[test]
    fn test_stray_endif() {
        assert_fails_with(
            eval_asm("OP_1 OP_ENDIF"),
            InterpreterErrorCode::UnbalancedConditional,
        );
    }

    #[test]
    fn test_double_else() {
        assert_fails_with(
            eval_asm("OP_1 OP_IF OP_1 OP_ELSE OP_2 OP_ELSE OP_3 OP_ENDIF"),
            InterpreterErrorCode::UnbalancedConditional,
        );
    }

    #[test]
    fn test_op_verify() {
        eval_asm("OP_1 OP_1 OP_VERIFY").unwrap();
        assert_fails_with(eval_asm("OP_1 OP_0 OP_VERIFY"), InterpreterErrorCode::Verify);
    }

    // ------------------------------------------------------------------
    // Disabled and reserved opcodes
    // ------------------------------------------------------------------

    #[test]
    fn test_disabled_opcodes() {
        for asm in [
            "OP_1 OP_1 OP_CAT",
            "OP_1 OP_1 OP_AND",
            "OP_1 OP_2MUL",
            "OP_2 OP_2 OP_MUL",
            "OP_4 OP_2 OP_DIV",
            "OP_4 OP_2 OP_MOD",
            "OP_1 OP_1 OP_LSHIFT",
        ] {
            assert_fails_with(eval_asm(asm), InterpreterErrorCode::DisabledOpcode);
        }
    }

    #[test]
    fn test_disabled_opcode_fails_in_unexecuted_branch() {
        assert_fails_with(
            eval_asm("OP_0 OP_IF OP_CAT OP_ENDIF OP_1"),
            InterpreterErrorCode::DisabledOpcode,
        );
    }

    #[test]
    fn test_reserved_opcode_fails_when_executed() {
        assert_fails_with(eval_asm("OP_RESERVED"), InterpreterErrorCode::ReservedOpcode);
        assert_fails_with(eval_asm("OP_VER"), InterpreterErrorCode::ReservedOpcode);
    }

    #[test]
    fn test_reserved_opcode_ok_in_unexecuted_branch() {
        eval_asm("OP_0 OP_IF OP_RESERVED OP_ENDIF OP_1").unwrap();
    }

    #[test]
    fn test_verif_fails_even_in_unexecuted_branch() {
        let script = Script::from_bytes(&[OP_0, OP_IF, OP_VERIF, OP_ENDIF, OP_1]);
        let result = run_script_cfg(&script, Config::default()).map(|_| ());
        assert_fails_with(result, InterpreterErrorCode::ReservedOpcode);
    }

    #[test]
    fn test_unknown_opcode_fails() {
        let script = Script::from_bytes(&[OP_1, 0xba]);
        let result = run_script_cfg(&script, Config::default()).map(|_| ());
        assert_fails_with(result, InterpreterErrorCode::ReservedOpcode);
    }

    // ------------------------------------------------------------------
    // Stack ops
    // ------------------------------------------------------------------

    #[test]
    fn test_alt_stack_round_trip() {
        eval_asm("OP_5 OP_TOALTSTACK OP_0 OP_DROP OP_FROMALTSTACK OP_5 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_from_alt_stack_empty() {
        assert_fails_with(
            eval_asm("OP_FROMALTSTACK"),
            InterpreterErrorCode::InvalidStackOperation,
        );
    }

    #[test]
    fn test_op_depth() {
        eval_asm("OP_1 OP_2 OP_3 OP_DEPTH OP_3 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_ifdup() {
        eval_asm("OP_1 OP_IFDUP OP_DEPTH OP_2 OP_EQUAL").unwrap();
        eval_asm("OP_0 OP_IFDUP OP_DEPTH OP_1 OP_EQUALVERIFY OP_1").unwrap();
    }

    #[test]
    fn test_op_pick() {
        eval_asm("OP_1 OP_2 OP_3 OP_2 OP_PICK OP_1 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_roll() {
        let ctx = run_asm("OP_1 OP_2 OP_3 OP_2 OP_ROLL").unwrap();
        assert_eq!(ctx.dstack.get_stack(), vec![vec![2], vec![3], vec![1]]);
    }

    #[test]
    fn test_op_rot_swap_tuck() {
        let ctx = run_asm("OP_1 OP_2 OP_3 OP_ROT").unwrap();
        assert_eq!(ctx.dstack.get_stack(), vec![vec![2], vec![3], vec![1]]);
        let ctx = run_asm("OP_1 OP_2 OP_SWAP").unwrap();
        assert_eq!(ctx.dstack.get_stack(), vec![vec![2], vec![1]]);
        let ctx = run_asm("OP_1 OP_2 OP_TUCK").unwrap();
        assert_eq!(ctx.dstack.get_stack(), vec![vec![2], vec![1], vec![2]]);
    }

    #[test]
    fn test_two_item_stack_ops() {
        let ctx = run_asm("OP_1 OP_2 OP_3 OP_4 OP_2SWAP").unwrap();
        assert_eq!(
            ctx.dstack.get_stack(),
            vec![vec![3], vec![4], vec![1], vec![2]]
        );
        let ctx = run_asm("OP_1 OP_2 OP_3DUP").unwrap();
        assert_eq!(ctx.dstack.depth(), 5);
        eval_asm("OP_1 OP_2 OP_2DROP OP_1").unwrap();
        eval_asm("OP_1 OP_2 OP_NIP OP_2 OP_EQUAL").unwrap();
        eval_asm("OP_1 OP_2 OP_OVER OP_1 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_stack_underflow_errors() {
        assert_fails_with(eval_asm("OP_DROP"), InterpreterErrorCode::InvalidStackOperation);
        assert_fails_with(
            eval_asm("OP_1 OP_SWAP"),
            InterpreterErrorCode::InvalidStackOperation,
        );
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    #[test]
    fn test_op_add() {
        eval_asm("OP_2 OP_3 OP_ADD OP_5 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_sub() {
        eval_asm("OP_5 OP_2 OP_SUB OP_3 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_sub_negative_result() {
        eval_asm("OP_2 OP_5 OP_SUB OP_3 OP_ADD OP_0 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_unary_numeric_ops() {
        eval_asm("OP_4 OP_1ADD OP_5 OP_EQUAL").unwrap();
        eval_asm("OP_4 OP_1SUB OP_3 OP_EQUAL").unwrap();
        eval_asm("OP_1NEGATE OP_NEGATE OP_1 OP_EQUAL").unwrap();
        eval_asm("OP_1NEGATE OP_ABS OP_1 OP_EQUAL").unwrap();
        eval_asm("OP_0 OP_NOT").unwrap();
        eval_asm("OP_7 OP_0NOTEQUAL").unwrap();
    }

    #[test]
    fn test_bool_and_comparison_ops() {
        eval_asm("OP_1 OP_2 OP_BOOLAND").unwrap();
        assert_fails_with(eval_asm("OP_0 OP_2 OP_BOOLAND"), InterpreterErrorCode::EvalFalse);
        eval_asm("OP_0 OP_2 OP_BOOLOR").unwrap();
        eval_asm("OP_3 OP_3 OP_NUMEQUAL").unwrap();
        eval_asm("OP_3 OP_4 OP_NUMNOTEQUAL").unwrap();
        eval_asm("OP_2 OP_3 OP_LESSTHAN").unwrap();
        eval_asm("OP_3 OP_2 OP_GREATERTHAN").unwrap();
        eval_asm("OP_3 OP_3 OP_LESSTHANOREQUAL").unwrap();
        eval_asm("OP_3 OP_3 OP_GREATERTHANOREQUAL").unwrap();
    }

    #[test]
    fn test_numequalverify() {
        eval_asm("OP_3 OP_3 OP_NUMEQUALVERIFY OP_1").unwrap();
        assert_fails_with(
            eval_asm("OP_3 OP_4 OP_NUMEQUALVERIFY OP_1"),
            InterpreterErrorCode::NumEqualVerify,
        );
    }

    #[test]
    fn test_min_max_within() {
        eval_asm("OP_2 OP_5 OP_MIN OP_2 OP_EQUAL").unwrap();
        eval_asm("OP_2 OP_5 OP_MAX OP_5 OP_EQUAL").unwrap();
        eval_asm("OP_3 OP_2 OP_5 OP_WITHIN").unwrap();
        assert_fails_with(
            eval_asm("OP_5 OP_2 OP_5 OP_WITHIN"),
            InterpreterErrorCode::EvalFalse,
        );
    }

    #[test]
    fn test_oversized_number_operand() {
        // A 5 byte operand exceeds the 4 byte numeric limit
        assert_fails_with(
            eval_asm("0100000001 OP_1ADD"),
            InterpreterErrorCode::NumberTooBig,
        );
    }

    // ------------------------------------------------------------------
    // Hashing
    // ------------------------------------------------------------------

    #[test]
    fn test_op_sha256_empty_input() {
        eval_asm(
            "OP_0 OP_SHA256 e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855 OP_EQUAL",
        )
        .unwrap();
    }

    #[test]
    fn test_op_hash256_empty_input() {
        eval_asm(
            "OP_0 OP_HASH256 5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456 OP_EQUAL",
        )
        .unwrap();
    }

    #[test]
    fn test_op_sha1() {
        // sha1("abc")
        eval_asm("616263 OP_SHA1 a9993e364706816aba3e25717850c26c9cd0d89d OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_hash160() {
        // ripemd160(sha256("abc"))
        eval_asm("616263 OP_HASH160 bb1be98c142444d7a56aa3981c3942a978e4dc33 OP_EQUAL").unwrap();
    }

    #[test]
    fn test_op_nops_do_nothing() {
        eval_asm("OP_1 OP_NOP OP_NOP1 OP_NOP10").unwrap();
    }

    // ------------------------------------------------------------------
    // Resource limits
    // ------------------------------------------------------------------

    #[test]
    fn test_op_count_limit_boundary() {
        let mut bytes = vec![OP_1];
        bytes.extend(std::iter::repeat(OP_NOP).take(201));
        let mut ctx = run_script_cfg(&Script::from_bytes(&bytes), Config::default()).unwrap();
        ctx.check_error_condition().unwrap();

        let mut bytes = vec![OP_1];
        bytes.extend(std::iter::repeat(OP_NOP).take(202));
        let result = run_script_cfg(&Script::from_bytes(&bytes), Config::default()).map(|_| ());
        assert_fails_with(result, InterpreterErrorCode::TooManyOperations);
    }

    #[test]
    fn test_small_int_pushes_are_exempt_from_op_count() {
        let bytes = vec![OP_1; 300];
        let mut ctx = run_script_cfg(&Script::from_bytes(&bytes), Config::default()).unwrap();
        ctx.check_error_condition().unwrap();
    }

    #[test]
    fn test_stack_size_limit() {
        let bytes = vec![OP_1; 1_001];
        let result = run_script_cfg(&Script::from_bytes(&bytes), Config::default()).map(|_| ());
        assert_fails_with(result, InterpreterErrorCode::StackOverflow);
    }

    #[test]
    fn test_element_size_limit() {
        let mut script = Script::new();
        script.append_push_data(&vec![0u8; 521]).unwrap();
        let result = run_script_cfg(&script, Config::default()).map(|_| ());
        assert_fails_with(result, InterpreterErrorCode::ElementTooBig);

        let mut script = Script::new();
        script.append_push_data(&vec![0u8; 520]).unwrap();
        run_script_cfg(&script, Config::default()).unwrap();
    }

    // ------------------------------------------------------------------
    // Signature checking ops
    // ------------------------------------------------------------------

    #[test]
    fn test_checksig_without_tx_context() {
        assert_fails_with(
            eval_asm("OP_1 OP_1 OP_CHECKSIG"),
            InterpreterErrorCode::MissingTxContext,
        );
    }

    #[test]
    fn test_checksig_empty_signature_pushes_false() {
        assert_fails_with(
            eval_asm("OP_0 OP_1 OP_CHECKSIG"),
            InterpreterErrorCode::EvalFalse,
        );
    }

    #[test]
    fn test_checksig_with_stub_context() {
        let checker = AlwaysValid;
        let script = Script::from_asm("aa41 OP_1 OP_CHECKSIG").unwrap();
        let chunks = decode_script(&script.to_bytes()).unwrap();
        let mut ctx = ExecutionContext::new(Config::default(), Some(&checker), 0);
        ctx.run_script(chunks).unwrap();
        ctx.check_error_condition().unwrap();
    }

    #[test]
    fn test_checksig_rejects_unknown_sighash_base() {
        let cfg = Config {
            reject_unknown_sighash_base: true,
            ..Config::default()
        };
        let script = Script::from_asm("aa00 OP_1 OP_CHECKSIG").unwrap();
        let result = run_script_cfg(&script, cfg).map(|_| ());
        assert_fails_with(result, InterpreterErrorCode::InvalidSigHashType);
    }

    #[test]
    fn test_codeseparator_trims_signed_subscript() {
        let checker = RecordingChecker::new();
        let pk = vec![0x02u8; 33];
        let mut lock = Script::new();
        lock.append_opcodes(&[OP_NOP, OP_CODESEPARATOR]).unwrap();
        lock.append_push_data(&pk).unwrap();
        lock.append_opcodes(&[OP_CHECKSIG]).unwrap();

        let chunks = decode_script(&lock.to_bytes()).unwrap();
        let mut ctx = ExecutionContext::new(Config::default(), Some(&checker), 0);
        ctx.dstack.push_byte_array(vec![0xaa, 0x01]);
        ctx.run_script(chunks).unwrap();
        ctx.check_error_condition().unwrap();

        let mut expected = Script::new();
        expected.append_push_data(&pk).unwrap();
        expected.append_opcodes(&[OP_CHECKSIG]).unwrap();
        assert_eq!(checker.seen.borrow().as_slice(), &[expected.to_bytes()]);
    }

    /// A separator at the very first chunk still trims itself out of the
    /// signed subscript, even in fork id mode where nothing is scrubbed.
    #[test]
    fn test_codeseparator_at_script_start() {
        let checker = RecordingChecker::new();
        let pk = vec![0x02u8; 33];
        let mut lock = Script::new();
        lock.append_opcodes(&[OP_CODESEPARATOR]).unwrap();
        lock.append_push_data(&pk).unwrap();
        lock.append_opcodes(&[OP_CHECKSIG]).unwrap();

        let chunks = decode_script(&lock.to_bytes()).unwrap();
        let mut ctx = ExecutionContext::new(Config::default(), Some(&checker), 0);
        ctx.dstack.push_byte_array(vec![0xaa, 0x41]);
        ctx.run_script(chunks).unwrap();
        ctx.check_error_condition().unwrap();

        let mut expected = Script::new();
        expected.append_push_data(&pk).unwrap();
        expected.append_opcodes(&[OP_CHECKSIG]).unwrap();
        assert_eq!(checker.seen.borrow().as_slice(), &[expected.to_bytes()]);
    }

    /// An empty signature element in CHECKMULTISIG just fails verification.
    #[test]
    fn test_checkmultisig_empty_signature() {
        let checker = AlwaysValid;
        let lock = Script::multisig(1, &[vec![0x02u8; 33]]).unwrap();

        let mut unlock = Script::new();
        unlock.append_opcodes(&[OP_0, OP_0]).unwrap();

        let result = verify_scripts(&unlock, &lock, &Config::default(), Some(&checker), 0);
        assert_fails_with(result, InterpreterErrorCode::EvalFalse);
    }

    #[test]
    fn test_checkmultisig_with_stub_context() {
        let checker = AlwaysValid;
        let pk1 = vec![0x02u8; 33];
        let pk2 = vec![0x03u8; 33];
        let lock = Script::multisig(1, &[pk1, pk2]).unwrap();

        let mut unlock = Script::new();
        unlock.append_opcodes(&[OP_0]).unwrap();
        unlock.append_push_data(&[0xaa, 0x41]).unwrap();

        verify_scripts(&unlock, &lock, &Config::default(), Some(&checker), 0).unwrap();
    }

    #[test]
    fn test_checkmultisig_too_many_keys() {
        assert_fails_with(
            eval_asm("OP_0 OP_0 15 OP_CHECKMULTISIG"),
            InterpreterErrorCode::InvalidPubKeyCount,
        );
    }

    #[test]
    fn test_checkmultisig_negative_sig_count() {
        assert_fails_with(
            eval_asm("OP_0 OP_1NEGATE 11 OP_1 OP_CHECKMULTISIG"),
            InterpreterErrorCode::InvalidSignatureCount,
        );
    }

    #[test]
    fn test_checkmultisig_two_of_two() {
        let checker = AlwaysValid;
        let mut script = Script::new();
        script.append_opcodes(&[OP_0]).unwrap();
        script.append_push_data(&[0xaa, 0x41]).unwrap();
        script.append_push_data(&[0xbb, 0x41]).unwrap();
        script.append_opcodes(&[OP_2]).unwrap();
        script.append_push_data(&vec![0x02u8; 33]).unwrap();
        script.append_push_data(&vec![0x03u8; 33]).unwrap();
        script.append_opcodes(&[OP_2, OP_CHECKMULTISIG]).unwrap();

        let chunks = decode_script(&script.to_bytes()).unwrap();
        let mut ctx = ExecutionContext::new(Config::default(), Some(&checker), 0);
        ctx.run_script(chunks).unwrap();
        ctx.check_error_condition().unwrap();
    }

    struct NeverValid;

    impl TxContext for NeverValid {
        fn check_signature(
            &self,
            _sig: &[u8],
            _pub_key: &[u8],
            _sub_script: &Script,
            _input_idx: usize,
            _hash_type: u32,
        ) -> Result<bool, InterpreterError> {
            Ok(false)
        }
    }

    #[test]
    fn test_checkmultisig_runs_out_of_keys() {
        let checker = NeverValid;
        let mut script = Script::new();
        script.append_opcodes(&[OP_0]).unwrap();
        script.append_push_data(&[0xaa, 0x41]).unwrap();
        script.append_opcodes(&[OP_1]).unwrap();
        script.append_push_data(&vec![0x02u8; 33]).unwrap();
        script.append_opcodes(&[OP_1, OP_CHECKMULTISIG]).unwrap();

        let chunks = decode_script(&script.to_bytes()).unwrap();
        let mut ctx = ExecutionContext::new(Config::default(), Some(&checker), 0);
        ctx.run_script(chunks).unwrap();
        assert_fails_with(
            ctx.check_error_condition(),
            InterpreterErrorCode::EvalFalse,
        );
    }

    // ------------------------------------------------------------------
    // Full verification
    // ------------------------------------------------------------------

    #[test]
    fn test_verify_scripts_simple() {
        let unlock = Script::from_asm("OP_1").unwrap();
        let lock = Script::from_asm("OP_1 OP_EQUAL").unwrap();
        verify_scripts(&unlock, &lock, &Config::default(), None, 0).unwrap();
    }

    #[test]
    fn test_verify_scripts_false_result() {
        let unlock = Script::from_asm("OP_1").unwrap();
        let lock = Script::from_asm("OP_2 OP_EQUAL").unwrap();
        assert_fails_with(
            verify_scripts(&unlock, &lock, &Config::default(), None, 0),
            InterpreterErrorCode::EvalFalse,
        );
    }

    #[test]
    fn test_verify_scripts_both_empty() {
        let empty = Script::new();
        assert_fails_with(
            verify_scripts(&empty, &empty, &Config::default(), None, 0),
            InterpreterErrorCode::EvalFalse,
        );
    }

    #[test]
    fn test_verify_scripts_empty_stack_at_end() {
        let unlock = Script::from_asm("OP_1").unwrap();
        let lock = Script::from_asm("OP_DROP").unwrap();
        assert_fails_with(
            verify_scripts(&unlock, &lock, &Config::default(), None, 0),
            InterpreterErrorCode::EmptyStack,
        );
    }

    #[test]
    fn test_verify_scripts_size_limit() {
        let big = Script::from_bytes(&vec![OP_NOP; 10_001]);
        let small = Script::from_asm("OP_1").unwrap();
        assert_fails_with(
            verify_scripts(&big, &small, &Config::default(), None, 0),
            InterpreterErrorCode::ScriptTooBig,
        );
    }

    #[test]
    fn test_verify_scripts_truncated_push() {
        let unlock = Script::from_bytes(&[0x02, 0xaa]);
        let lock = Script::from_asm("OP_1").unwrap();
        assert_fails_with(
            verify_scripts(&unlock, &lock, &Config::default(), None, 0),
            InterpreterErrorCode::MalformedPush,
        );
    }

    fn p2sh_fixture() -> (Script, Script) {
        // redeem: OP_2 OP_EQUAL, satisfied by pushing 02
        let redeem = Script::from_asm("OP_2 OP_EQUAL").unwrap();
        let hash = bch_primitives::hash::hash160(&redeem.to_bytes());
        let lock = Script::pay_to_script_hash(&hash);

        let mut unlock = Script::new();
        unlock.append_push_data(&[0x02]).unwrap();
        unlock.append_push_data(&redeem.to_bytes()).unwrap();
        (unlock, lock)
    }

    #[test]
    fn test_verify_scripts_p2sh() {
        let (unlock, lock) = p2sh_fixture();
        verify_scripts(&unlock, &lock, &Config::default(), None, 0).unwrap();
    }

    #[test]
    fn test_verify_scripts_p2sh_redeem_fails() {
        let (_, lock) = p2sh_fixture();
        let redeem = Script::from_asm("OP_2 OP_EQUAL").unwrap();
        let mut unlock = Script::new();
        unlock.append_push_data(&[0x03]).unwrap();
        unlock.append_push_data(&redeem.to_bytes()).unwrap();
        assert_fails_with(
            verify_scripts(&unlock, &lock, &Config::default(), None, 0),
            InterpreterErrorCode::EvalFalse,
        );
    }

    #[test]
    fn test_verify_scripts_p2sh_requires_push_only_unlock() {
        let (unlock, lock) = p2sh_fixture();
        let mut bad = Script::from_bytes(&unlock.to_bytes());
        bad.append_opcodes(&[OP_NOP]).unwrap();
        assert_fails_with(
            verify_scripts(&bad, &lock, &Config::default(), None, 0),
            InterpreterErrorCode::NotPushOnly,
        );
    }

    #[test]
    fn test_verify_scripts_p2sh_inactive_before_activation() {
        // Before BIP16 activation the lock script is treated literally, so
        // pushing bytes that hash to the script hash is enough.
        let redeem = Script::from_asm("OP_RETURN").unwrap();
        let hash = bch_primitives::hash::hash160(&redeem.to_bytes());
        let lock = Script::pay_to_script_hash(&hash);
        let mut unlock = Script::new();
        unlock.append_push_data(&redeem.to_bytes()).unwrap();

        let cfg = Config {
            block_timestamp: 0,
            ..Config::default()
        };
        verify_scripts(&unlock, &lock, &cfg, None, 0).unwrap();
    }

    #[test]
    fn test_stack_persists_from_unlock_to_lock() {
        let unlock = Script::from_asm("OP_2 OP_3").unwrap();
        let lock = Script::from_asm("OP_ADD OP_5 OP_EQUAL").unwrap();
        verify_scripts(&unlock, &lock, &Config::default(), None, 0).unwrap();
    }
}
