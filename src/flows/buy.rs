//! Purchase flow.

use alloy::primitives::U256;
use alloy::rpc::types::TransactionReceipt;

use crate::config::schema::ClientConfig;
use crate::flows::{market, FlowError};
use crate::observability::metrics;
use crate::state::store::Store;
use crate::sync;

/// Buy token `id`, paying `price` wei.
///
/// The price comes from the listing the buyer saw; zero means the token is
/// not for sale and the flow stops before any remote call. The contract
/// rejects a payment that no longer matches the live listing.
pub async fn buy(
    store: &Store,
    config: &ClientConfig,
    id: u64,
    price: U256,
) -> Result<TransactionReceipt, FlowError> {
    if price.is_zero() {
        return Err(FlowError::Validation(
            "token is not listed for sale".to_string(),
        ));
    }

    let contract = market(store, config)?;
    let receipt = match contract.buy(id, price).await {
        Ok(receipt) => receipt,
        Err(e) => {
            metrics::record_mutation("buy", "error");
            tracing::warn!(id, error = %e, "buy failed");
            return Err(e.into());
        }
    };

    metrics::record_mutation("buy", "confirmed");
    tracing::info!(tx_hash = %receipt.transaction_hash, id, %price, "purchase confirmed");

    sync::refresh(store, &contract).await?;
    Ok(receipt)
}
