pub mod config;
pub mod error;
pub mod switch;

// Re-export commonly used types
pub use config::{init_from_env, ContractConfig, ENV_CONTRACTS_ENABLED};
pub use error::{ContractError, ContractKind};
pub use switch::{disable, enable, is_enabled, scoped, set_contracts_enabled, SwitchGuard};
