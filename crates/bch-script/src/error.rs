/// Error types for script operations.
///
/// Covers parsing errors, encoding/decoding failures, and script
/// construction problems.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Generic invalid script error.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// An unrecognized or invalid opcode was encountered.
    #[error("invalid opcode: {0}")]
    InvalidOpcode(u8),

    /// Invalid opcode data encountered during ASM parsing.
    #[error("invalid opcode data")]
    InvalidOpcodeData,

    /// Attempted to use append_opcodes for a push data opcode.
    #[error("use append_push_data for push data funcs: {0}")]
    InvalidOpcodeType(String),

    /// Script too large.
    #[error("script too large: {0} bytes")]
    ScriptTooLarge(usize),

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Script is empty when a non-empty script was expected.
    #[error("script is empty")]
    EmptyScript,

    /// Script is not a P2PKH script.
    #[error("not a P2PKH")]
    NotP2PKH,

    /// Not enough data in script to complete a push operation.
    #[error("not enough data")]
    DataTooSmall,

    /// Push data exceeds maximum allowed size.
    #[error("data too big")]
    DataTooBig,

    /// A push data part exceeds protocol limits.
    #[error("part too big '{0}'")]
    PartTooBig(usize),

    /// Multisig threshold is zero, or exceeds the key count or the
    /// largest count expressible as a small-integer opcode.
    #[error("invalid multisig threshold {required} of {total}")]
    InvalidThreshold { required: usize, total: usize },

    /// Interpreter error.
    #[error("interpreter error: {0}")]
    InterpreterError(String),

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] bch_primitives::PrimitivesError),
}
