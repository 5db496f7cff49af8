//! Environment-driven configuration for the contract switch.
//!
//! Reads:
//! - `CONTRACTS_ENABLED`: present turns contracts on. `0`, `false`, `off`,
//!   `no` or an empty value turn them off explicitly.

use crate::switch;

/// Environment variable consulted by [`ContractConfig::from_env`].
pub const ENV_CONTRACTS_ENABLED: &str = "CONTRACTS_ENABLED";

/// Contract settings resolved from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractConfig {
    /// Whether wrappers constructed after [`apply`](Self::apply) check anything.
    pub enabled: bool,
}

impl ContractConfig {
    pub fn from_env() -> Self {
        let value = std::env::var_os(ENV_CONTRACTS_ENABLED);
        Self::from_value(value.as_ref().map(|v| v.to_string_lossy()).as_deref())
    }

    /// Interprets a raw `CONTRACTS_ENABLED` value (`None` when unset).
    pub fn from_value(value: Option<&str>) -> Self {
        let enabled = match value {
            None => false,
            Some(raw) => {
                let raw = raw.trim().to_ascii_lowercase();
                !matches!(raw.as_str(), "" | "0" | "false" | "off" | "no")
            }
        };
        ContractConfig { enabled }
    }

    pub fn apply(&self) {
        switch::set_contracts_enabled(self.enabled);
    }
}

/// Reads the environment and applies it to the switch.
pub fn init_from_env() -> ContractConfig {
    let config = ContractConfig::from_env();
    if config.enabled != switch::is_enabled() {
        tracing::info!(
            enabled = config.enabled,
            "contract switch set from {}",
            ENV_CONTRACTS_ENABLED
        );
    }
    config.apply();
    config
}
