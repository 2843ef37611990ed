use thiserror::Error;

/// Errors from transaction parsing, signature hashing, and verification.
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("unexpected trailing bytes after transaction")]
    TrailingBytes,

    #[error("transaction id must be 32 bytes")]
    InvalidTxIdLength,

    #[error("input index {0} out of range")]
    InputOutOfRange(usize),

    #[error("hex decoding error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error(transparent)]
    Script(#[from] bch_script::ScriptError),

    #[error(transparent)]
    Interpreter(#[from] bch_script::interpreter::InterpreterError),

    #[error(transparent)]
    Primitives(#[from] bch_primitives::PrimitivesError),
}
