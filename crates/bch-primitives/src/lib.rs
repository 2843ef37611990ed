/// BCH kit - hashing, binary serialization, and secp256k1 primitives.
///
/// This crate provides the foundational building blocks for the kit:
/// - Hash functions (SHA-256, SHA-256d, SHA-1, RIPEMD-160, Hash160)
/// - Byte reader/writer and variable-length integer encoding
/// - Elliptic curve cryptography (secp256k1 keys and ECDSA signatures)

pub mod ec;
pub mod hash;
pub mod util;

mod error;
pub use error::PrimitivesError;
