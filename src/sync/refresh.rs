//! Catalog refresh.
//!
//! A refresh is a full rebuild: read the authoritative total, then each
//! token individually. An id that fails to read is logged and omitted;
//! the rest of the rebuild proceeds. Consumers only ever observe the
//! completed snapshot, swapped into the store in one step.

use std::sync::Arc;

use crate::contract::proxy::MarketContract;
use crate::contract::types::ContractResult;
use crate::observability::metrics;
use crate::state::store::Store;
use crate::sync::catalog::{Catalog, TokenItem};

/// Rebuild the catalog from chain state and publish it to the store.
///
/// Returns the published snapshot. A failing total-minted read aborts the
/// whole refresh (the previous catalog stays); a failing per-id read
/// degrades that entry only.
pub async fn refresh(store: &Store, contract: &MarketContract) -> ContractResult<Arc<Catalog>> {
    let total = contract.total_minted().await?;

    let mut items: Vec<TokenItem> = Vec::with_capacity(total as usize);
    let mut skipped = 0usize;

    for id in 1..=total {
        match contract.token(id).await {
            Ok(item) => items.push(item),
            Err(e) => {
                skipped += 1;
                tracing::warn!(id, error = %e, "token unreadable; omitting from catalog");
            }
        }
    }

    let catalog = Catalog {
        items,
        total_minted: total,
    };

    metrics::record_refresh(catalog.len(), skipped);
    tracing::info!(
        total,
        items = catalog.len(),
        skipped,
        "catalog refreshed"
    );

    store.replace_catalog(catalog);
    Ok(store.catalog())
}
