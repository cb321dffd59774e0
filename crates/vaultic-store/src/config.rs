//! Vault configuration.

use vaultic_core::defaults::{
    DEFAULT_MASTER_PASSPHRASE, ENV_EVENT_CAPACITY, ENV_MASTER_PASSPHRASE, SESSION_BUS_CAPACITY,
};

/// Configuration for opening a [`crate::Vault`].
///
/// Read from environment variables at open time; no restart semantics
/// beyond re-opening the vault.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// The single shared master passphrase checked on sign-in.
    pub master_passphrase: String,
    /// Session event bus broadcast capacity.
    pub event_capacity: usize,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            master_passphrase: DEFAULT_MASTER_PASSPHRASE.to_string(),
            event_capacity: SESSION_BUS_CAPACITY,
        }
    }
}

impl VaultConfig {
    /// Load configuration from environment variables with fallback to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var(ENV_MASTER_PASSPHRASE) {
            if val.is_empty() {
                tracing::warn!(
                    var = ENV_MASTER_PASSPHRASE,
                    "Empty master passphrase override ignored, using default"
                );
            } else {
                config.master_passphrase = val;
            }
        }

        if let Ok(val) = std::env::var(ENV_EVENT_CAPACITY) {
            match val.parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.event_capacity = capacity,
                _ => {
                    tracing::warn!(
                        var = ENV_EVENT_CAPACITY,
                        value = %val,
                        "Invalid event capacity, using default"
                    );
                }
            }
        }

        config
    }
}
