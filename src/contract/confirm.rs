//! Transaction confirmation monitoring.
//!
//! Mutations block their flow until the submitted transaction settles. The
//! loop polls the receipt and block height; there is no timeout and no
//! retry. A hung node hangs the calling flow until the user intervenes,
//! and a failed poll is reported as-is.

use std::time::Duration;

use alloy::primitives::TxHash;
use alloy::rpc::types::TransactionReceipt;
use tokio::time::interval;

use crate::chain::client::ChainClient;
use crate::contract::types::{ContractError, ContractResult};

/// Poll until `tx_hash` has at least `required` confirmations.
///
/// Inclusion in a block counts as the first confirmation, so the default
/// depth of 1 settles as soon as the receipt lands, which is immediately
/// on an auto-mining development node.
pub async fn wait_for_confirmation(
    chain: &ChainClient,
    tx_hash: TxHash,
    required: u32,
    poll_interval: Duration,
) -> ContractResult<TransactionReceipt> {
    let mut ticker = interval(poll_interval);

    loop {
        ticker.tick().await;

        let receipt = match chain
            .transaction_receipt(tx_hash)
            .await
            .map_err(|e| ContractError::Rpc(e.to_string()))?
        {
            Some(receipt) => receipt,
            None => {
                tracing::debug!(tx_hash = %tx_hash, "transaction pending");
                continue;
            }
        };

        // Check if transaction succeeded
        if !receipt.status() {
            return Err(ContractError::Rejected(
                "transaction reverted".to_string(),
            ));
        }

        let current = chain
            .block_number()
            .await
            .map_err(|e| ContractError::Rpc(e.to_string()))?;
        let tx_block = receipt.block_number.unwrap_or(current);
        let confirmations = current.saturating_sub(tx_block) as u32 + 1;

        if confirmations >= required {
            tracing::debug!(
                tx_hash = %tx_hash,
                block = tx_block,
                confirmations,
                "transaction confirmed"
            );
            return Ok(receipt);
        }

        tracing::debug!(
            tx_hash = %tx_hash,
            confirmations,
            required,
            "waiting for confirmations"
        );
    }
}
