//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and address/URL formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use alloy::primitives::Address;

use crate::config::schema::ClientConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.node.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError {
            field: "node.rpc_url",
            message: format!("not a valid URL: {e}"),
        });
    }

    if config.node.chain_id == 0 {
        errors.push(ValidationError {
            field: "node.chain_id",
            message: "must be non-zero".to_string(),
        });
    }

    if config.contract.address.is_empty() {
        errors.push(ValidationError {
            field: "contract.address",
            message: "must be set (pass --contract or configure it)".to_string(),
        });
    } else if let Err(e) = config.contract.address.parse::<Address>() {
        errors.push(ValidationError {
            field: "contract.address",
            message: format!("not a valid address: {e}"),
        });
    }

    if config.contract.confirmation_blocks == 0 {
        errors.push(ValidationError {
            field: "contract.confirmation_blocks",
            message: "must be at least 1".to_string(),
        });
    }

    if config.contract.poll_interval_ms == 0 {
        errors.push(ValidationError {
            field: "contract.poll_interval_ms",
            message: "must be positive".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
