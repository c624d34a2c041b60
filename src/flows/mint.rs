//! Mint flow.

use alloy::rpc::types::TransactionReceipt;

use crate::config::schema::ClientConfig;
use crate::flows::{market, FlowError};
use crate::observability::metrics;
use crate::state::store::Store;
use crate::sync;

/// Mint a new token carrying `uri`.
///
/// Validates locally, submits through the bound signer, awaits settlement,
/// then clears the mint draft and rebuilds the catalog.
pub async fn mint(
    store: &Store,
    config: &ClientConfig,
    uri: &str,
) -> Result<TransactionReceipt, FlowError> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err(FlowError::Validation(
            "mint URI must not be empty".to_string(),
        ));
    }

    let contract = market(store, config)?;
    let receipt = match contract.mint(uri).await {
        Ok(receipt) => receipt,
        Err(e) => {
            metrics::record_mutation("mint", "error");
            tracing::warn!(error = %e, "mint failed");
            return Err(e.into());
        }
    };

    metrics::record_mutation("mint", "confirmed");
    tracing::info!(tx_hash = %receipt.transaction_hash, uri, "mint confirmed");

    let mut drafts = (*store.drafts()).clone();
    drafts.mint_uri.clear();
    store.replace_drafts(drafts);

    sync::refresh(store, &contract).await?;
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Validation runs before anything touches the session, so an empty
    // URI fails the same way with or without a connection.
    #[tokio::test]
    async fn test_empty_uri_rejected_before_any_remote_call() {
        let store = Store::new();
        let config = ClientConfig::default();

        let result = mint(&store, &config, "   ").await;
        assert!(matches!(result, Err(FlowError::Validation(_))));
        assert!(store.catalog().is_empty());
    }
}
