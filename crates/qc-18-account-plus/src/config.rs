//! # Account Plus Configuration
//!
//! Chain id, genesis activation flag and governance authority.
//!
//! ## Environment Overrides
//!
//! | Variable | Format | Field |
//! |----------|--------|-------|
//! | `QC_CHAIN_ID` | string | `chain_id` |
//! | `QC_SMART_ACCOUNT_ACTIVE` | `true`/`false`/`1`/`0` | `smart_account_active` |
//! | `QC_GOV_AUTHORITY` | 40 hex chars | `authority` |

use crate::domain::entities::Params;
use shared_types::Address;
use thiserror::Error;
use tracing::info;

pub const ENV_CHAIN_ID: &str = "QC_CHAIN_ID";
pub const ENV_SMART_ACCOUNT_ACTIVE: &str = "QC_SMART_ACCOUNT_ACTIVE";
pub const ENV_GOV_AUTHORITY: &str = "QC_GOV_AUTHORITY";

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be true/false/1/0, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be a 20-byte hex address: {reason}")]
    InvalidAddress { var: &'static str, reason: String },
}

/// Account-plus module configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPlusConfig {
    pub chain_id: String,
    /// Genesis value of the circuit breaker flag.
    pub smart_account_active: bool,
    /// Governance address allowed to change params.
    pub authority: Address,
}

impl Default for AccountPlusConfig {
    fn default() -> Self {
        Self {
            chain_id: "quantum-chain-local".to_string(),
            smart_account_active: false,
            authority: [0u8; 20],
        }
    }
}

impl AccountPlusConfig {
    /// Config for tests: smart accounts on, fixed authority.
    pub fn for_testing() -> Self {
        Self {
            chain_id: "quantum-chain-test".to_string(),
            smart_account_active: true,
            authority: [0xA0; 20],
        }
    }

    /// Defaults overridden by `QC_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(chain_id) = lookup(ENV_CHAIN_ID) {
            config.chain_id = chain_id;
        }

        if let Some(value) = lookup(ENV_SMART_ACCOUNT_ACTIVE) {
            config.smart_account_active = parse_bool(ENV_SMART_ACCOUNT_ACTIVE, &value)?;
        }

        if let Some(value) = lookup(ENV_GOV_AUTHORITY) {
            config.authority = parse_address(ENV_GOV_AUTHORITY, &value)?;
            info!("Loaded governance authority from environment");
        }

        Ok(config)
    }

    /// Params the keeper starts with at height 0.
    pub fn genesis_params(&self) -> Params {
        Params {
            is_smart_account_active: self.smart_account_active,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_address(var: &'static str, value: &str) -> Result<Address, ConfigError> {
    let trimmed = value.trim();
    let hex_str = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    let bytes = hex::decode(hex_str).map_err(|e| ConfigError::InvalidAddress {
        var,
        reason: e.to_string(),
    })?;

    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| ConfigError::InvalidAddress {
            var,
            reason: format!("expected 20 bytes, got {}", bytes.len()),
        })
}
