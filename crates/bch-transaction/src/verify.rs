//! Input verification and signing against the script interpreter.

use bch_primitives::ec::{PrivateKey, PublicKey, Signature};
use bch_script::interpreter::{verify_scripts, Config, InterpreterError, TxContext};
use bch_script::Script;

use crate::error::TransactionError;
use crate::sighash::signature_hash;
use crate::transaction::Transaction;

/// Transaction context handed to the interpreter for CHECKSIG-family
/// opcodes. Computes the signature hash for the spending transaction and
/// verifies ECDSA signatures against it.
pub struct SigChecker<'a> {
    pub tx: &'a Transaction,
    pub prev_value: u64,
}

impl TxContext for SigChecker<'_> {
    fn check_signature(
        &self,
        sig: &[u8],
        pub_key: &[u8],
        sub_script: &Script,
        input_idx: usize,
        hash_type: u32,
    ) -> Result<bool, InterpreterError> {
        // The trailing byte is the hash type, not part of the DER blob
        if sig.len() < 2 {
            return Ok(false);
        }
        let der = &sig[..sig.len() - 1];

        let digest =
            match signature_hash(self.tx, input_idx, sub_script, self.prev_value, hash_type) {
                Ok(d) => d,
                Err(_) => return Ok(false),
            };
        let signature = match Signature::from_der(der) {
            Ok(s) => s,
            Err(_) => return Ok(false),
        };
        let public_key = match PublicKey::from_bytes(pub_key) {
            Ok(p) => p,
            Err(_) => return Ok(false),
        };
        Ok(public_key.verify(&digest, &signature))
    }
}

/// Verify that input `input_index` of `tx` correctly spends an output
/// locked by `prev_lock` with value `prev_value`.
pub fn verify_input(
    tx: &Transaction,
    input_index: usize,
    prev_lock: &Script,
    prev_value: u64,
    cfg: &Config,
) -> Result<(), TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InputOutOfRange(input_index));
    }
    let checker = SigChecker { tx, prev_value };
    let unlock = &tx.inputs[input_index].unlocking_script;
    verify_scripts(unlock, prev_lock, cfg, Some(&checker), input_index)?;
    Ok(())
}

/// Produce a script-ready signature (DER with the hash type byte
/// appended) for one input.
pub fn sign_input(
    tx: &Transaction,
    input_index: usize,
    sub_script: &Script,
    prev_value: u64,
    hash_type: u32,
    key: &PrivateKey,
) -> Result<Vec<u8>, TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InputOutOfRange(input_index));
    }
    let digest = signature_hash(tx, input_index, sub_script, prev_value, hash_type)?;
    let signature = key.sign(&digest)?;
    let mut sig = signature.to_der();
    sig.push(hash_type as u8);
    Ok(sig)
}
