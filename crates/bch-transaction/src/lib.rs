//! Transactions, signature hashing, and input verification.
//!
//! [`Transaction`] carries the wire structure; [`sighash`] computes the
//! digests signatures commit to; [`verify`] wires the script interpreter
//! to real ECDSA checking through [`verify::SigChecker`].

pub mod error;
pub mod input;
pub mod output;
pub mod sighash;
pub mod transaction;
pub mod verify;

pub use error::TransactionError;
pub use input::{OutPoint, TxInput};
pub use output::TxOutput;
pub use sighash::SighashType;
pub use transaction::Transaction;
