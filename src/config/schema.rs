//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the marketplace client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Node endpoint settings.
    pub node: NodeConfig,

    /// Marketplace contract settings.
    pub contract: ContractConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Node endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// JSON-RPC endpoint URL of the single local node.
    pub rpc_url: String,

    /// Expected chain ID (31337 for a local Hardhat/Anvil node).
    pub chain_id: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            chain_id: 31337,
        }
    }
}

/// Marketplace contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Deployed marketplace contract address, produced by the one-shot
    /// deploy step.
    pub address: String,

    /// Confirmations required before a mutation is considered settled.
    /// Inclusion in a block counts as the first.
    pub confirmation_blocks: u32,

    /// Receipt polling interval while awaiting settlement, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            confirmation_blocks: 1,
            poll_interval_ms: 2000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9464".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.node.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.node.chain_id, 31337);
        assert_eq!(config.contract.confirmation_blocks, 1);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_minimal_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.contract.address,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
        // Everything else falls back to defaults.
        assert_eq!(config.node.chain_id, 31337);
        assert_eq!(config.contract.poll_interval_ms, 2000);
    }
}
