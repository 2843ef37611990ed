/// BCH kit - Script parsing, construction, and interpretation.
///
/// Provides the Bitcoin Cash Script type, opcode definitions, script chunk
/// parsing, standard output templates, and a full script interpreter with a
/// 256-entry dispatch table.

pub mod chunk;
pub mod interpreter;
pub mod opcodes;
pub mod script;

mod error;
pub use chunk::ScriptChunk;
pub use error::ScriptError;
pub use script::Script;
