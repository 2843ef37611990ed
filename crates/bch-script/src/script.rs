/// Bitcoin Cash script type - a sequence of opcodes and data pushes.
///
/// Scripts are used in transaction inputs (unlocking) and outputs (locking)
/// to define spending conditions. The Script wraps a `Vec<u8>` and provides
/// methods for construction, classification, serialization, and ASM output.

use std::fmt;
use std::str::FromStr;

use crate::chunk::{
    decode_script, encode_script, is_push_only, push_data_prefix, remove_data_pushes,
    remove_opcode, ScriptChunk,
};
use crate::opcodes::*;
use crate::ScriptError;

/// A Bitcoin Cash script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(hex_str).map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Ok(Script(bytes))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create a script from a chunk sequence.
    pub fn from_chunks(chunks: &[ScriptChunk]) -> Self {
        Script(encode_script(chunks))
    }

    /// Create a script from a Bitcoin ASM string.
    ///
    /// Parses space-separated tokens where known opcodes (e.g. "OP_DUP") are
    /// emitted directly and hex strings are treated as push data.
    pub fn from_asm(asm: &str) -> Result<Self, ScriptError> {
        let mut script = Script::new();
        if asm.is_empty() {
            return Ok(script);
        }
        for section in asm.split(' ') {
            if let Some(opcode) = string_to_opcode(section) {
                script.append_opcodes(&[opcode])?;
            } else {
                script.append_push_data_hex(section)?;
            }
        }
        Ok(script)
    }

    // -----------------------------------------------------------------------
    // Standard output templates
    // -----------------------------------------------------------------------

    /// Build a P2PKH locking script for a 20-byte public key hash.
    ///
    /// Pattern: OP_DUP OP_HASH160 <pkh> OP_EQUALVERIFY OP_CHECKSIG
    pub fn pay_to_public_key_hash(pkh: &[u8; 20]) -> Self {
        let mut bytes = vec![OP_DUP, OP_HASH160, OP_DATA_20];
        bytes.extend_from_slice(pkh);
        bytes.push(OP_EQUALVERIFY);
        bytes.push(OP_CHECKSIG);
        Script(bytes)
    }

    /// Build a P2SH locking script for a 20-byte script hash.
    ///
    /// Pattern: OP_HASH160 <hash> OP_EQUAL
    pub fn pay_to_script_hash(hash: &[u8; 20]) -> Self {
        let mut bytes = vec![OP_HASH160, OP_DATA_20];
        bytes.extend_from_slice(hash);
        bytes.push(OP_EQUAL);
        Script(bytes)
    }

    /// Build a bare multisig locking script.
    ///
    /// Pattern: OP_M <pubkey>... OP_N OP_CHECKMULTISIG. The threshold must
    /// be at least one and no larger than the key count, and both counts
    /// must fit in a small-integer opcode (at most 16 keys).
    pub fn multisig(required: usize, pub_keys: &[Vec<u8>]) -> Result<Self, ScriptError> {
        let total = pub_keys.len();
        if required == 0 || required > total || total > 16 {
            return Err(ScriptError::InvalidThreshold { required, total });
        }
        let mut script = Script(vec![OP_1 + (required as u8) - 1]);
        for key in pub_keys {
            script.append_push_data(key)?;
        }
        script.0.push(OP_1 + (total as u8) - 1);
        script.0.push(OP_CHECKMULTISIG);
        Ok(script)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Encode the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Convert the script to its ASM (human-readable assembly) representation.
    ///
    /// Each opcode or data push is represented as a space-separated token.
    /// Data pushes appear as their hex encoding; opcodes appear by name.
    /// Returns an empty string for empty or malformed scripts.
    pub fn to_asm(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        match self.chunks() {
            Ok(chunks) => chunks
                .iter()
                .map(|c| c.to_asm_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            Err(_) => String::new(),
        }
    }

    /// Return a reference to the underlying bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return the length of the script in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the script is empty (zero bytes).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Script classification
    // -----------------------------------------------------------------------

    /// Check if this is a Pay-to-Public-Key-Hash (P2PKH) output script.
    ///
    /// Pattern: OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == 25
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == OP_DATA_20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    /// Check if this is a Pay-to-Public-Key (P2PK) output script.
    ///
    /// Pattern: <pubkey> OP_CHECKSIG (pubkey is 33 or 65 bytes with valid prefix).
    pub fn is_p2pk(&self) -> bool {
        let parts = match self.chunks() {
            Ok(p) => p,
            Err(_) => return false,
        };
        if parts.len() == 2 && parts[1].op == OP_CHECKSIG {
            if let Some(ref pubkey) = parts[0].data {
                if !pubkey.is_empty() {
                    let version = pubkey[0];
                    if (version == 0x04 || version == 0x06 || version == 0x07)
                        && pubkey.len() == 65
                    {
                        return true;
                    } else if (version == 0x03 || version == 0x02) && pubkey.len() == 33 {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Check if this is a Pay-to-Script-Hash (P2SH) output script.
    ///
    /// Pattern: OP_HASH160 <20 bytes> OP_EQUAL
    pub fn is_p2sh(&self) -> bool {
        let b = &self.0;
        b.len() == 23 && b[0] == OP_HASH160 && b[1] == OP_DATA_20 && b[22] == OP_EQUAL
    }

    /// Check if this is a data output script (OP_RETURN or OP_FALSE OP_RETURN).
    pub fn is_data(&self) -> bool {
        let b = &self.0;
        (!b.is_empty() && b[0] == OP_RETURN)
            || (b.len() > 1 && b[0] == OP_FALSE && b[1] == OP_RETURN)
    }

    /// Check if this is a multisig output script.
    ///
    /// Pattern: OP_M <pubkey1> <pubkey2> ... OP_N OP_CHECKMULTISIG, with
    /// 1 <= M <= N and exactly N key pushes between the threshold opcodes.
    pub fn is_multisig_out(&self) -> bool {
        let parts = match self.chunks() {
            Ok(p) => p,
            Err(_) => return false,
        };
        if parts.len() < 4 || parts[parts.len() - 1].op != OP_CHECKMULTISIG {
            return false;
        }
        let required = match small_int_value(parts[0].op) {
            Some(m) if m >= 1 => m,
            _ => return false,
        };
        let total = match small_int_value(parts[parts.len() - 2].op) {
            Some(n) if n >= required => n,
            _ => return false,
        };
        if parts.len() != total as usize + 3 {
            return false;
        }
        parts[1..parts.len() - 2]
            .iter()
            .all(|chunk| matches!(&chunk.data, Some(d) if !d.is_empty()))
    }

    /// Check if every operation in the script is a data push.
    pub fn is_push_only(&self) -> bool {
        match self.chunks() {
            Ok(parts) => is_push_only(&parts),
            Err(_) => false,
        }
    }

    // -----------------------------------------------------------------------
    // Data extraction
    // -----------------------------------------------------------------------

    /// Extract the public key hash from a P2PKH script.
    ///
    /// Returns the 20-byte hash160 if the script starts with OP_DUP OP_HASH160.
    pub fn public_key_hash(&self) -> Result<Vec<u8>, ScriptError> {
        if self.0.is_empty() {
            return Err(ScriptError::EmptyScript);
        }
        if self.0.len() <= 2 || self.0[0] != OP_DUP || self.0[1] != OP_HASH160 {
            return Err(ScriptError::NotP2PKH);
        }
        let tail = &self.0[2..];
        let parts = decode_script(tail)?;
        match parts.first() {
            Some(chunk) => match &chunk.data {
                Some(data) => Ok(data.clone()),
                None => Err(ScriptError::NotP2PKH),
            },
            None => Err(ScriptError::NotP2PKH),
        }
    }

    /// Parse the script into a vector of decoded chunks.
    pub fn chunks(&self) -> Result<Vec<ScriptChunk>, ScriptError> {
        decode_script(&self.0)
    }

    // -----------------------------------------------------------------------
    // Mutation / building
    // -----------------------------------------------------------------------

    /// Append data bytes to the script with the proper PUSHDATA prefix.
    ///
    /// Chooses the minimal encoding: direct push for 1-75 bytes,
    /// OP_PUSHDATA1 for 76-255, OP_PUSHDATA2 for 256-65535, etc.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        let prefix = push_data_prefix(data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Append hex-encoded data to the script with proper PUSHDATA prefix.
    pub fn append_push_data_hex(&mut self, hex_str: &str) -> Result<(), ScriptError> {
        let data = hex::decode(hex_str).map_err(|_| ScriptError::InvalidOpcodeData)?;
        self.append_push_data(&data)
    }

    /// Append raw opcodes to the script.
    ///
    /// Rejects push data opcodes (OP_DATA_1..OP_PUSHDATA4) to prevent misuse.
    /// Use `append_push_data` for those.
    pub fn append_opcodes(&mut self, opcodes: &[u8]) -> Result<(), ScriptError> {
        for &op in opcodes {
            if (OP_DATA_1..=OP_PUSHDATA4).contains(&op) {
                return Err(ScriptError::InvalidOpcodeType(opcode_to_string(op)));
            }
        }
        self.0.extend_from_slice(opcodes);
        Ok(())
    }

    /// Append another script's bytes verbatim.
    pub fn append_script(&mut self, other: &Script) {
        self.0.extend_from_slice(&other.0);
    }

    /// Remove every canonical push whose payload contains the given bytes.
    ///
    /// Returns an error if the script does not parse into chunks.
    pub fn delete_data_occurrences(&self, data: &[u8]) -> Result<Script, ScriptError> {
        let chunks = self.chunks()?;
        Ok(Script::from_chunks(&remove_data_pushes(&chunks, data)))
    }

    /// Remove every occurrence of an opcode.
    ///
    /// Returns an error if the script does not parse into chunks.
    pub fn delete_opcode_occurrences(&self, opcode: u8) -> Result<Script, ScriptError> {
        let chunks = self.chunks()?;
        Ok(Script::from_chunks(&remove_opcode(&chunks, opcode)))
    }

    /// Check if this script is byte-equal to another script.
    pub fn equals(&self, other: &Script) -> bool {
        self.0 == other.0
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Script {
    /// Display the script as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::from_hex(s)
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
