//! List-for-sale flow.

use alloy::primitives::U256;
use alloy::rpc::types::TransactionReceipt;

use crate::config::schema::ClientConfig;
use crate::flows::{market, FlowError};
use crate::observability::metrics;
use crate::state::store::Store;
use crate::sync;

/// Put token `id` up for sale at `price` wei.
///
/// A listing price must be positive: zero is the on-chain "not listed"
/// marker. Ownership is enforced by the contract, not locally.
pub async fn list(
    store: &Store,
    config: &ClientConfig,
    id: u64,
    price: U256,
) -> Result<TransactionReceipt, FlowError> {
    if price.is_zero() {
        return Err(FlowError::Validation(
            "listing price must be positive".to_string(),
        ));
    }

    let contract = market(store, config)?;
    let receipt = match contract.list(id, price).await {
        Ok(receipt) => receipt,
        Err(e) => {
            metrics::record_mutation("list", "error");
            tracing::warn!(id, error = %e, "list failed");
            return Err(e.into());
        }
    };

    metrics::record_mutation("list", "confirmed");
    tracing::info!(tx_hash = %receipt.transaction_hash, id, %price, "listing confirmed");

    let mut drafts = (*store.drafts()).clone();
    drafts.price.clear();
    store.replace_drafts(drafts);

    sync::refresh(store, &contract).await?;
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_price_rejected_before_any_remote_call() {
        let store = Store::new();
        let config = ClientConfig::default();

        let result = list(&store, &config, 7, U256::ZERO).await;
        assert!(matches!(result, Err(FlowError::Validation(_))));
        // Last-known-good view untouched.
        assert!(store.catalog().is_empty());
    }
}
