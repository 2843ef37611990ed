//! Interpreter resource limits and policy knobs.

/// Unix timestamp at which BIP16 (P2SH) evaluation activated.
pub const BIP16_ACTIVATION_TIME: u32 = 1_333_238_400;

/// Execution limits and validation policy for a script run.
///
/// All consensus limits live here as plain data so a caller can tighten or
/// relax them per evaluation instead of recompiling behavior into the
/// interpreter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum serialized size of a single script in bytes.
    pub max_script_size: usize,
    /// Maximum size of a single pushed stack element in bytes.
    pub max_element_size: usize,
    /// Maximum number of counted (non-push) operations per script.
    pub max_ops_per_script: usize,
    /// Maximum number of public keys in a CHECKMULTISIG.
    pub max_multisig_keys: usize,
    /// Maximum combined depth of the data and alt stacks.
    pub max_stack_size: usize,
    /// Maximum byte length of a stack element interpreted as a number.
    pub max_num_length: usize,
    /// Timestamp at which P2SH evaluation becomes active.
    pub bip16_activation_time: u32,
    /// Timestamp of the block the evaluated transaction is judged against.
    pub block_timestamp: u32,
    /// When set, signature checks fail on an unknown sighash base type
    /// instead of treating it like SIGHASH_ALL.
    pub reject_unknown_sighash_base: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_script_size: 10_000,
            max_element_size: 520,
            max_ops_per_script: 201,
            max_multisig_keys: 20,
            max_stack_size: 1_000,
            max_num_length: 4,
            bip16_activation_time: BIP16_ACTIVATION_TIME,
            block_timestamp: u32::MAX,
            reject_unknown_sighash_base: false,
        }
    }
}

impl Config {
    /// True when P2SH evaluation applies at the configured block timestamp.
    pub fn p2sh_active(&self) -> bool {
        self.block_timestamp >= self.bip16_activation_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let cfg = Config::default();
        assert_eq!(cfg.max_script_size, 10_000);
        assert_eq!(cfg.max_element_size, 520);
        assert_eq!(cfg.max_ops_per_script, 201);
        assert_eq!(cfg.max_multisig_keys, 20);
        assert_eq!(cfg.max_num_length, 4);
        assert!(cfg.p2sh_active());
    }

    #[test]
    fn test_p2sh_activation_boundary() {
        let mut cfg = Config::default();
        cfg.block_timestamp = BIP16_ACTIVATION_TIME - 1;
        assert!(!cfg.p2sh_active());
        cfg.block_timestamp = BIP16_ACTIVATION_TIME;
        assert!(cfg.p2sh_active());
    }
}
