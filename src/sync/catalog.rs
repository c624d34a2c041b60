//! Catalog snapshot types.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// One token as last read from the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenItem {
    pub id: u64,
    /// Metadata URI the token was minted with.
    pub uri: String,
    pub owner: Address,
    /// Listing price in wei; zero means not listed.
    pub price: U256,
}

impl TokenItem {
    /// Whether the token is currently for sale.
    pub fn is_listed(&self) -> bool {
        !self.price.is_zero()
    }
}

/// Full snapshot of the marketplace, ascending by id.
///
/// Rebuilt in whole on every refresh; unreadable ids are omitted, so the
/// snapshot may be shorter than `total_minted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<TokenItem>,
    /// The authoritative total-minted counter the snapshot was built from.
    pub total_minted: u64,
}

impl Catalog {
    /// Look up a token by id.
    pub fn get(&self, id: u64) -> Option<&TokenItem> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
