//! Umbrella crate re-exporting the BCH kit workspace members.
//!
//! - [`primitives`]: hashing, byte serialization, secp256k1 keys
//! - [`script`]: script parsing, construction, and interpretation
//! - [`transaction`]: transactions, signature hashing, input verification

pub use bch_primitives as primitives;
pub use bch_script as script;
pub use bch_transaction as transaction;

pub use bch_script::interpreter::{verify_scripts, Config};
pub use bch_script::Script;
pub use bch_transaction::verify::verify_input;
pub use bch_transaction::Transaction;
