//! Transaction inputs and the outpoints they spend.

use bch_primitives::util::{ByteReader, ByteWriter};
use bch_script::Script;
use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Transaction id in wire order (byte-reversed relative to the usual
    /// hex display).
    pub txid: [u8; 32],
    pub vout: u32,
}

impl OutPoint {
    pub fn new(txid: [u8; 32], vout: u32) -> Self {
        OutPoint { txid, vout }
    }

    /// Build from a display-order transaction id hex string.
    pub fn from_hex_id(txid_hex: &str, vout: u32) -> Result<Self, TransactionError> {
        let bytes = hex::decode(txid_hex)?;
        if bytes.len() != 32 {
            return Err(TransactionError::InvalidTxIdLength);
        }
        let mut txid = [0u8; 32];
        for (i, b) in bytes.iter().rev().enumerate() {
            txid[i] = *b;
        }
        Ok(OutPoint { txid, vout })
    }

    /// Transaction id in display order.
    pub fn txid_hex(&self) -> String {
        let mut reversed = self.txid;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// True for the outpoint form used by coinbase inputs.
    pub fn is_null(&self) -> bool {
        self.txid == [0u8; 32] && self.vout == u32::MAX
    }

    pub(crate) fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let mut txid = [0u8; 32];
        txid.copy_from_slice(reader.read_bytes(32)?);
        let vout = reader.read_u32_le()?;
        Ok(OutPoint { txid, vout })
    }

    pub(crate) fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_bytes(&self.txid);
        writer.write_u32_le(self.vout);
    }
}

/// One input of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub outpoint: OutPoint,
    pub unlocking_script: Script,
    pub sequence: u32,
}

impl TxInput {
    pub fn new(outpoint: OutPoint, unlocking_script: Script, sequence: u32) -> Self {
        TxInput {
            outpoint,
            unlocking_script,
            sequence,
        }
    }

    pub(crate) fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let outpoint = OutPoint::read_from(reader)?;
        let script_len = reader.read_varint()?.value() as usize;
        let script_bytes = reader.read_bytes(script_len)?;
        let sequence = reader.read_u32_le()?;
        Ok(TxInput {
            outpoint,
            unlocking_script: Script::from_bytes(script_bytes),
            sequence,
        })
    }

    pub(crate) fn write_to(&self, writer: &mut ByteWriter) {
        self.outpoint.write_to(writer);
        writer.write_varbytes(&self.unlocking_script.to_bytes());
        writer.write_u32_le(self.sequence);
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        self.write_to(&mut writer);
        writer.into_bytes()
    }
}
