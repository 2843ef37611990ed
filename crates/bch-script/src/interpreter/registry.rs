//! Static dispatch table mapping every opcode byte to its handler.

use crate::chunk::ScriptChunk;

use super::context::ExecutionContext;
use super::error::InterpreterError;
use super::{ops_arithmetic, ops_crypto, ops_data, ops_flow, ops_stack};

/// Handler signature shared by every opcode implementation.
pub type OpHandler = fn(&mut ExecutionContext, &ScriptChunk) -> Result<(), InterpreterError>;

/// One row of the dispatch table.
pub struct OpcodeEntry {
    pub code: u8,
    pub name: &'static str,
    pub exec: OpHandler,
}

/// Look up the table row for an opcode byte.
pub fn entry(op: u8) -> &'static OpcodeEntry {
    &OPCODE_TABLE[op as usize]
}

/// Every opcode byte maps to exactly one row; the row index equals the
/// opcode value.
pub static OPCODE_TABLE: [OpcodeEntry; 256] = [
    OpcodeEntry { code: 0x00, name: "OP_0", exec: ops_data::op_false },
    OpcodeEntry { code: 0x01, name: "OP_DATA_1", exec: ops_data::op_push },
    OpcodeEntry { code: 0x02, name: "OP_DATA_2", exec: ops_data::op_push },
    OpcodeEntry { code: 0x03, name: "OP_DATA_3", exec: ops_data::op_push },
    OpcodeEntry { code: 0x04, name: "OP_DATA_4", exec: ops_data::op_push },
    OpcodeEntry { code: 0x05, name: "OP_DATA_5", exec: ops_data::op_push },
    OpcodeEntry { code: 0x06, name: "OP_DATA_6", exec: ops_data::op_push },
    OpcodeEntry { code: 0x07, name: "OP_DATA_7", exec: ops_data::op_push },
    OpcodeEntry { code: 0x08, name: "OP_DATA_8", exec: ops_data::op_push },
    OpcodeEntry { code: 0x09, name: "OP_DATA_9", exec: ops_data::op_push },
    OpcodeEntry { code: 0x0a, name: "OP_DATA_10", exec: ops_data::op_push },
    OpcodeEntry { code: 0x0b, name: "OP_DATA_11", exec: ops_data::op_push },
    OpcodeEntry { code: 0x0c, name: "OP_DATA_12", exec: ops_data::op_push },
    OpcodeEntry { code: 0x0d, name: "OP_DATA_13", exec: ops_data::op_push },
    OpcodeEntry { code: 0x0e, name: "OP_DATA_14", exec: ops_data::op_push },
    OpcodeEntry { code: 0x0f, name: "OP_DATA_15", exec: ops_data::op_push },
    OpcodeEntry { code: 0x10, name: "OP_DATA_16", exec: ops_data::op_push },
    OpcodeEntry { code: 0x11, name: "OP_DATA_17", exec: ops_data::op_push },
    OpcodeEntry { code: 0x12, name: "OP_DATA_18", exec: ops_data::op_push },
    OpcodeEntry { code: 0x13, name: "OP_DATA_19", exec: ops_data::op_push },
    OpcodeEntry { code: 0x14, name: "OP_DATA_20", exec: ops_data::op_push },
    OpcodeEntry { code: 0x15, name: "OP_DATA_21", exec: ops_data::op_push },
    OpcodeEntry { code: 0x16, name: "OP_DATA_22", exec: ops_data::op_push },
    OpcodeEntry { code: 0x17, name: "OP_DATA_23", exec: ops_data::op_push },
    OpcodeEntry { code: 0x18, name: "OP_DATA_24", exec: ops_data::op_push },
    OpcodeEntry { code: 0x19, name: "OP_DATA_25", exec: ops_data::op_push },
    OpcodeEntry { code: 0x1a, name: "OP_DATA_26", exec: ops_data::op_push },
    OpcodeEntry { code: 0x1b, name: "OP_DATA_27", exec: ops_data::op_push },
    OpcodeEntry { code: 0x1c, name: "OP_DATA_28", exec: ops_data::op_push },
    OpcodeEntry { code: 0x1d, name: "OP_DATA_29", exec: ops_data::op_push },
    OpcodeEntry { code: 0x1e, name: "OP_DATA_30", exec: ops_data::op_push },
    OpcodeEntry { code: 0x1f, name: "OP_DATA_31", exec: ops_data::op_push },
    OpcodeEntry { code: 0x20, name: "OP_DATA_32", exec: ops_data::op_push },
    OpcodeEntry { code: 0x21, name: "OP_DATA_33", exec: ops_data::op_push },
    OpcodeEntry { code: 0x22, name: "OP_DATA_34", exec: ops_data::op_push },
    OpcodeEntry { code: 0x23, name: "OP_DATA_35", exec: ops_data::op_push },
    OpcodeEntry { code: 0x24, name: "OP_DATA_36", exec: ops_data::op_push },
    OpcodeEntry { code: 0x25, name: "OP_DATA_37", exec: ops_data::op_push },
    OpcodeEntry { code: 0x26, name: "OP_DATA_38", exec: ops_data::op_push },
    OpcodeEntry { code: 0x27, name: "OP_DATA_39", exec: ops_data::op_push },
    OpcodeEntry { code: 0x28, name: "OP_DATA_40", exec: ops_data::op_push },
    OpcodeEntry { code: 0x29, name: "OP_DATA_41", exec: ops_data::op_push },
    OpcodeEntry { code: 0x2a, name: "OP_DATA_42", exec: ops_data::op_push },
    OpcodeEntry { code: 0x2b, name: "OP_DATA_43", exec: ops_data::op_push },
    OpcodeEntry { code: 0x2c, name: "OP_DATA_44", exec: ops_data::op_push },
    OpcodeEntry { code: 0x2d, name: "OP_DATA_45", exec: ops_data::op_push },
    OpcodeEntry { code: 0x2e, name: "OP_DATA_46", exec: ops_data::op_push },
    OpcodeEntry { code: 0x2f, name: "OP_DATA_47", exec: ops_data::op_push },
    OpcodeEntry { code: 0x30, name: "OP_DATA_48", exec: ops_data::op_push },
    OpcodeEntry { code: 0x31, name: "OP_DATA_49", exec: ops_data::op_push },
    OpcodeEntry { code: 0x32, name: "OP_DATA_50", exec: ops_data::op_push },
    OpcodeEntry { code: 0x33, name: "OP_DATA_51", exec: ops_data::op_push },
    OpcodeEntry { code: 0x34, name: "OP_DATA_52", exec: ops_data::op_push },
    OpcodeEntry { code: 0x35, name: "OP_DATA_53", exec: ops_data::op_push },
    OpcodeEntry { code: 0x36, name: "OP_DATA_54", exec: ops_data::op_push },
    OpcodeEntry { code: 0x37, name: "OP_DATA_55", exec: ops_data::op_push },
    OpcodeEntry { code: 0x38, name: "OP_DATA_56", exec: ops_data::op_push },
    OpcodeEntry { code: 0x39, name: "OP_DATA_57", exec: ops_data::op_push },
    OpcodeEntry { code: 0x3a, name: "OP_DATA_58", exec: ops_data::op_push },
    OpcodeEntry { code: 0x3b, name: "OP_DATA_59", exec: ops_data::op_push },
    OpcodeEntry { code: 0x3c, name: "OP_DATA_60", exec: ops_data::op_push },
    OpcodeEntry { code: 0x3d, name: "OP_DATA_61", exec: ops_data::op_push },
    OpcodeEntry { code: 0x3e, name: "OP_DATA_62", exec: ops_data::op_push },
    OpcodeEntry { code: 0x3f, name: "OP_DATA_63", exec: ops_data::op_push },
    OpcodeEntry { code: 0x40, name: "OP_DATA_64", exec: ops_data::op_push },
    OpcodeEntry { code: 0x41, name: "OP_DATA_65", exec: ops_data::op_push },
    OpcodeEntry { code: 0x42, name: "OP_DATA_66", exec: ops_data::op_push },
    OpcodeEntry { code: 0x43, name: "OP_DATA_67", exec: ops_data::op_push },
    OpcodeEntry { code: 0x44, name: "OP_DATA_68", exec: ops_data::op_push },
    OpcodeEntry { code: 0x45, name: "OP_DATA_69", exec: ops_data::op_push },
    OpcodeEntry { code: 0x46, name: "OP_DATA_70", exec: ops_data::op_push },
    OpcodeEntry { code: 0x47, name: "OP_DATA_71", exec: ops_data::op_push },
    OpcodeEntry { code: 0x48, name: "OP_DATA_72", exec: ops_data::op_push },
    OpcodeEntry { code: 0x49, name: "OP_DATA_73", exec: ops_data::op_push },
    OpcodeEntry { code: 0x4a, name: "OP_DATA_74", exec: ops_data::op_push },
    OpcodeEntry { code: 0x4b, name: "OP_DATA_75", exec: ops_data::op_push },
    OpcodeEntry { code: 0x4c, name: "OP_PUSHDATA1", exec: ops_data::op_push },
    OpcodeEntry { code: 0x4d, name: "OP_PUSHDATA2", exec: ops_data::op_push },
    OpcodeEntry { code: 0x4e, name: "OP_PUSHDATA4", exec: ops_data::op_push },
    OpcodeEntry { code: 0x4f, name: "OP_1NEGATE", exec: ops_data::op_1negate },
    OpcodeEntry { code: 0x50, name: "OP_RESERVED", exec: ops_flow::op_reserved },
    OpcodeEntry { code: 0x51, name: "OP_1", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x52, name: "OP_2", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x53, name: "OP_3", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x54, name: "OP_4", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x55, name: "OP_5", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x56, name: "OP_6", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x57, name: "OP_7", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x58, name: "OP_8", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x59, name: "OP_9", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x5a, name: "OP_10", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x5b, name: "OP_11", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x5c, name: "OP_12", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x5d, name: "OP_13", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x5e, name: "OP_14", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x5f, name: "OP_15", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x60, name: "OP_16", exec: ops_data::op_small_int },
    OpcodeEntry { code: 0x61, name: "OP_NOP", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0x62, name: "OP_VER", exec: ops_flow::op_reserved },
    OpcodeEntry { code: 0x63, name: "OP_IF", exec: ops_flow::op_if },
    OpcodeEntry { code: 0x64, name: "OP_NOTIF", exec: ops_flow::op_notif },
    OpcodeEntry { code: 0x65, name: "OP_VERIF", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0x66, name: "OP_VERNOTIF", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0x67, name: "OP_ELSE", exec: ops_flow::op_else },
    OpcodeEntry { code: 0x68, name: "OP_ENDIF", exec: ops_flow::op_endif },
    OpcodeEntry { code: 0x69, name: "OP_VERIFY", exec: ops_flow::op_verify },
    OpcodeEntry { code: 0x6a, name: "OP_RETURN", exec: ops_flow::op_return },
    OpcodeEntry { code: 0x6b, name: "OP_TOALTSTACK", exec: ops_stack::op_to_alt_stack },
    OpcodeEntry { code: 0x6c, name: "OP_FROMALTSTACK", exec: ops_stack::op_from_alt_stack },
    OpcodeEntry { code: 0x6d, name: "OP_2DROP", exec: ops_stack::op_2drop },
    OpcodeEntry { code: 0x6e, name: "OP_2DUP", exec: ops_stack::op_2dup },
    OpcodeEntry { code: 0x6f, name: "OP_3DUP", exec: ops_stack::op_3dup },
    OpcodeEntry { code: 0x70, name: "OP_2OVER", exec: ops_stack::op_2over },
    OpcodeEntry { code: 0x71, name: "OP_2ROT", exec: ops_stack::op_2rot },
    OpcodeEntry { code: 0x72, name: "OP_2SWAP", exec: ops_stack::op_2swap },
    OpcodeEntry { code: 0x73, name: "OP_IFDUP", exec: ops_stack::op_ifdup },
    OpcodeEntry { code: 0x74, name: "OP_DEPTH", exec: ops_stack::op_depth },
    OpcodeEntry { code: 0x75, name: "OP_DROP", exec: ops_stack::op_drop },
    OpcodeEntry { code: 0x76, name: "OP_DUP", exec: ops_stack::op_dup },
    OpcodeEntry { code: 0x77, name: "OP_NIP", exec: ops_stack::op_nip },
    OpcodeEntry { code: 0x78, name: "OP_OVER", exec: ops_stack::op_over },
    OpcodeEntry { code: 0x79, name: "OP_PICK", exec: ops_stack::op_pick },
    OpcodeEntry { code: 0x7a, name: "OP_ROLL", exec: ops_stack::op_roll },
    OpcodeEntry { code: 0x7b, name: "OP_ROT", exec: ops_stack::op_rot },
    OpcodeEntry { code: 0x7c, name: "OP_SWAP", exec: ops_stack::op_swap },
    OpcodeEntry { code: 0x7d, name: "OP_TUCK", exec: ops_stack::op_tuck },
    OpcodeEntry { code: 0x7e, name: "OP_CAT", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x7f, name: "OP_SUBSTR", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x80, name: "OP_LEFT", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x81, name: "OP_RIGHT", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x82, name: "OP_SIZE", exec: ops_data::op_size },
    OpcodeEntry { code: 0x83, name: "OP_INVERT", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x84, name: "OP_AND", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x85, name: "OP_OR", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x86, name: "OP_XOR", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x87, name: "OP_EQUAL", exec: ops_data::op_equal },
    OpcodeEntry { code: 0x88, name: "OP_EQUALVERIFY", exec: ops_data::op_equalverify },
    OpcodeEntry { code: 0x89, name: "OP_RESERVED1", exec: ops_flow::op_reserved },
    OpcodeEntry { code: 0x8a, name: "OP_RESERVED2", exec: ops_flow::op_reserved },
    OpcodeEntry { code: 0x8b, name: "OP_1ADD", exec: ops_arithmetic::op_1add },
    OpcodeEntry { code: 0x8c, name: "OP_1SUB", exec: ops_arithmetic::op_1sub },
    OpcodeEntry { code: 0x8d, name: "OP_2MUL", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x8e, name: "OP_2DIV", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x8f, name: "OP_NEGATE", exec: ops_arithmetic::op_negate },
    OpcodeEntry { code: 0x90, name: "OP_ABS", exec: ops_arithmetic::op_abs },
    OpcodeEntry { code: 0x91, name: "OP_NOT", exec: ops_arithmetic::op_not },
    OpcodeEntry { code: 0x92, name: "OP_0NOTEQUAL", exec: ops_arithmetic::op_0notequal },
    OpcodeEntry { code: 0x93, name: "OP_ADD", exec: ops_arithmetic::op_add },
    OpcodeEntry { code: 0x94, name: "OP_SUB", exec: ops_arithmetic::op_sub },
    OpcodeEntry { code: 0x95, name: "OP_MUL", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x96, name: "OP_DIV", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x97, name: "OP_MOD", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x98, name: "OP_LSHIFT", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x99, name: "OP_RSHIFT", exec: ops_flow::op_disabled },
    OpcodeEntry { code: 0x9a, name: "OP_BOOLAND", exec: ops_arithmetic::op_booland },
    OpcodeEntry { code: 0x9b, name: "OP_BOOLOR", exec: ops_arithmetic::op_boolor },
    OpcodeEntry { code: 0x9c, name: "OP_NUMEQUAL", exec: ops_arithmetic::op_numequal },
    OpcodeEntry { code: 0x9d, name: "OP_NUMEQUALVERIFY", exec: ops_arithmetic::op_numequalverify },
    OpcodeEntry { code: 0x9e, name: "OP_NUMNOTEQUAL", exec: ops_arithmetic::op_numnotequal },
    OpcodeEntry { code: 0x9f, name: "OP_LESSTHAN", exec: ops_arithmetic::op_lessthan },
    OpcodeEntry { code: 0xa0, name: "OP_GREATERTHAN", exec: ops_arithmetic::op_greaterthan },
    OpcodeEntry { code: 0xa1, name: "OP_LESSTHANOREQUAL", exec: ops_arithmetic::op_lessthanorequal },
    OpcodeEntry { code: 0xa2, name: "OP_GREATERTHANOREQUAL", exec: ops_arithmetic::op_greaterthanorequal },
    OpcodeEntry { code: 0xa3, name: "OP_MIN", exec: ops_arithmetic::op_min },
    OpcodeEntry { code: 0xa4, name: "OP_MAX", exec: ops_arithmetic::op_max },
    OpcodeEntry { code: 0xa5, name: "OP_WITHIN", exec: ops_arithmetic::op_within },
    OpcodeEntry { code: 0xa6, name: "OP_RIPEMD160", exec: ops_crypto::op_ripemd160 },
    OpcodeEntry { code: 0xa7, name: "OP_SHA1", exec: ops_crypto::op_sha1 },
    OpcodeEntry { code: 0xa8, name: "OP_SHA256", exec: ops_crypto::op_sha256 },
    OpcodeEntry { code: 0xa9, name: "OP_HASH160", exec: ops_crypto::op_hash160 },
    OpcodeEntry { code: 0xaa, name: "OP_HASH256", exec: ops_crypto::op_hash256 },
    OpcodeEntry { code: 0xab, name: "OP_CODESEPARATOR", exec: ops_crypto::op_codeseparator },
    OpcodeEntry { code: 0xac, name: "OP_CHECKSIG", exec: ops_crypto::op_checksig },
    OpcodeEntry { code: 0xad, name: "OP_CHECKSIGVERIFY", exec: ops_crypto::op_checksigverify },
    OpcodeEntry { code: 0xae, name: "OP_CHECKMULTISIG", exec: ops_crypto::op_checkmultisig },
    OpcodeEntry { code: 0xaf, name: "OP_CHECKMULTISIGVERIFY", exec: ops_crypto::op_checkmultisigverify },
    OpcodeEntry { code: 0xb0, name: "OP_NOP1", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb1, name: "OP_NOP2", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb2, name: "OP_NOP3", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb3, name: "OP_NOP4", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb4, name: "OP_NOP5", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb5, name: "OP_NOP6", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb6, name: "OP_NOP7", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb7, name: "OP_NOP8", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb8, name: "OP_NOP9", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xb9, name: "OP_NOP10", exec: ops_flow::op_nop },
    OpcodeEntry { code: 0xba, name: "OP_UNKNOWN_186", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xbb, name: "OP_UNKNOWN_187", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xbc, name: "OP_UNKNOWN_188", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xbd, name: "OP_UNKNOWN_189", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xbe, name: "OP_UNKNOWN_190", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xbf, name: "OP_UNKNOWN_191", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc0, name: "OP_UNKNOWN_192", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc1, name: "OP_UNKNOWN_193", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc2, name: "OP_UNKNOWN_194", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc3, name: "OP_UNKNOWN_195", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc4, name: "OP_UNKNOWN_196", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc5, name: "OP_UNKNOWN_197", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc6, name: "OP_UNKNOWN_198", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc7, name: "OP_UNKNOWN_199", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc8, name: "OP_UNKNOWN_200", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xc9, name: "OP_UNKNOWN_201", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xca, name: "OP_UNKNOWN_202", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xcb, name: "OP_UNKNOWN_203", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xcc, name: "OP_UNKNOWN_204", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xcd, name: "OP_UNKNOWN_205", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xce, name: "OP_UNKNOWN_206", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xcf, name: "OP_UNKNOWN_207", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd0, name: "OP_UNKNOWN_208", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd1, name: "OP_UNKNOWN_209", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd2, name: "OP_UNKNOWN_210", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd3, name: "OP_UNKNOWN_211", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd4, name: "OP_UNKNOWN_212", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd5, name: "OP_UNKNOWN_213", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd6, name: "OP_UNKNOWN_214", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd7, name: "OP_UNKNOWN_215", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd8, name: "OP_UNKNOWN_216", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xd9, name: "OP_UNKNOWN_217", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xda, name: "OP_UNKNOWN_218", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xdb, name: "OP_UNKNOWN_219", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xdc, name: "OP_UNKNOWN_220", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xdd, name: "OP_UNKNOWN_221", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xde, name: "OP_UNKNOWN_222", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xdf, name: "OP_UNKNOWN_223", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe0, name: "OP_UNKNOWN_224", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe1, name: "OP_UNKNOWN_225", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe2, name: "OP_UNKNOWN_226", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe3, name: "OP_UNKNOWN_227", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe4, name: "OP_UNKNOWN_228", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe5, name: "OP_UNKNOWN_229", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe6, name: "OP_UNKNOWN_230", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe7, name: "OP_UNKNOWN_231", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe8, name: "OP_UNKNOWN_232", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xe9, name: "OP_UNKNOWN_233", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xea, name: "OP_UNKNOWN_234", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xeb, name: "OP_UNKNOWN_235", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xec, name: "OP_UNKNOWN_236", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xed, name: "OP_UNKNOWN_237", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xee, name: "OP_UNKNOWN_238", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xef, name: "OP_UNKNOWN_239", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf0, name: "OP_UNKNOWN_240", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf1, name: "OP_UNKNOWN_241", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf2, name: "OP_UNKNOWN_242", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf3, name: "OP_UNKNOWN_243", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf4, name: "OP_UNKNOWN_244", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf5, name: "OP_UNKNOWN_245", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf6, name: "OP_UNKNOWN_246", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf7, name: "OP_UNKNOWN_247", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf8, name: "OP_UNKNOWN_248", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xf9, name: "OP_UNKNOWN_249", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xfa, name: "OP_UNKNOWN_250", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xfb, name: "OP_UNKNOWN_251", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xfc, name: "OP_UNKNOWN_252", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xfd, name: "OP_UNKNOWN_253", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xfe, name: "OP_UNKNOWN_254", exec: ops_flow::op_invalid },
    OpcodeEntry { code: 0xff, name: "OP_UNKNOWN_255", exec: ops_flow::op_invalid },
];
