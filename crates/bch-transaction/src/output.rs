//! Transaction outputs.

use bch_primitives::util::{ByteReader, ByteWriter};
use bch_script::Script;
use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

/// One output of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Value in satoshis.
    pub value: u64,
    pub locking_script: Script,
}

impl TxOutput {
    pub fn new(value: u64, locking_script: Script) -> Self {
        TxOutput {
            value,
            locking_script,
        }
    }

    pub(crate) fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let value = reader.read_u64_le()?;
        let script_len = reader.read_varint()?.value() as usize;
        let script_bytes = reader.read_bytes(script_len)?;
        Ok(TxOutput {
            value,
            locking_script: Script::from_bytes(script_bytes),
        })
    }

    pub(crate) fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_u64_le(self.value);
        writer.write_varbytes(&self.locking_script.to_bytes());
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        self.write_to(&mut writer);
        writer.into_bytes()
    }
}
