//! Blockchain RPC client.
//!
//! # Responsibilities
//! - Connect to the single JSON-RPC endpoint
//! - Enumerate the node's unlocked accounts
//! - Query chain state (block number, receipts)
//! - Verify the configured chain ID

use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;

use crate::chain::types::{ChainError, ChainId, ChainResult};
use crate::config::schema::NodeConfig;
use crate::observability::metrics;

/// Handle to the node endpoint. Cheap to clone; read-only on its own.
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider,
    config: NodeConfig,
}

impl ChainClient {
    /// Connect to the configured endpoint.
    ///
    /// # Returns
    /// A new client, or an error if the endpoint URL is unusable.
    pub async fn connect(config: NodeConfig) -> ChainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            ChainError::Connection(format!("invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let provider = ProviderBuilder::new().connect_http(url).erased();
        let client = Self { provider, config };

        // Verify chain ID matches configuration
        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    rpc_url = %client.config.rpc_url,
                    chain_id = client.config.chain_id,
                    "Chain client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Chain client initialized but chain verification failed"
                );
                // Don't fail initialization - allow graceful degradation
            }
        }

        Ok(client)
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> ChainResult<()> {
        let chain_id = self.chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(ChainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn chain_id(&self) -> ChainResult<ChainId> {
        self.provider
            .get_chain_id()
            .await
            .map(ChainId)
            .map_err(|e| rpc_error("chain_id", e))
    }

    /// Enumerate the node's own unlocked accounts.
    ///
    /// Two query forms are tried in sequence; the first non-empty result
    /// wins. Both failing (or both empty) yields an empty list rather than
    /// an error, so callers can fall back to bundled credentials.
    pub async fn unlocked_accounts(&self) -> Vec<Address> {
        match self
            .provider
            .raw_request::<_, Vec<Address>>("eth_accounts".into(), ())
            .await
        {
            Ok(accounts) if !accounts.is_empty() => return accounts,
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "eth_accounts query failed"),
        }

        match self.provider.get_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::debug!(error = %e, "account enumeration fallback failed");
                Vec::new()
            }
        }
    }

    /// Get the latest block number.
    pub async fn block_number(&self) -> ChainResult<u64> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| rpc_error("block_number", e))
    }

    /// Get a transaction receipt by hash. `None` means not yet mined.
    pub async fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ChainResult<Option<TransactionReceipt>> {
        self.provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| rpc_error("transaction_receipt", e))
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Get the endpoint URL.
    pub fn rpc_url(&self) -> &str {
        &self.config.rpc_url
    }

    /// Get the configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }
}

fn rpc_error(op: &'static str, err: impl std::fmt::Display) -> ChainError {
    metrics::record_rpc_error(op);
    ChainError::Rpc(err.to_string())
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .finish()
    }
}
