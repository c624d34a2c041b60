//! Explicit state container for the display layer.
//!
//! # Design Decisions
//! - Three field groups: session (connection + identities + signer
//!   binding), catalog, and draft inputs
//! - Each group is an immutable snapshot replaced wholesale; readers never
//!   observe a partially updated group
//! - arc-swap keeps reads lock-free; a watch channel is the change feed
//!   the display layer subscribes to

use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};
use tokio::sync::watch;

use crate::chain::client::ChainClient;
use crate::identity::types::{Identity, RosterSource, SignerBinding};
use crate::sync::catalog::Catalog;

/// The connection + active identity unit. Replaced wholesale on every
/// resolution or switch; never field-mutated in place.
#[derive(Debug, Clone)]
pub struct Session {
    pub chain: ChainClient,
    /// Known identities, in source order.
    pub identities: Vec<Identity>,
    /// Roster position of the active identity, if any.
    pub active: Option<usize>,
    /// Signing capability of the active identity. `None` means reads only.
    pub binding: Option<SignerBinding>,
    /// Which source the roster was built from; switching resolves against
    /// the same source.
    pub source: RosterSource,
}

impl Session {
    pub fn active_identity(&self) -> Option<&Identity> {
        self.active.and_then(|index| self.identities.get(index))
    }

    /// A session without a signer binding supports reads only.
    pub fn is_read_only(&self) -> bool {
        self.binding.is_none()
    }
}

/// Draft user inputs (the input-field group of the display layer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drafts {
    pub mint_uri: String,
    pub price: String,
}

/// What changed, for subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Init,
    SessionReplaced,
    CatalogReplaced,
    DraftsReplaced,
}

/// The state container. Cheap to share behind an `Arc`.
pub struct Store {
    session: ArcSwapOption<Session>,
    catalog: ArcSwap<Catalog>,
    drafts: ArcSwap<Drafts>,
    events: watch::Sender<StoreEvent>,
}

impl Store {
    pub fn new() -> Self {
        let (events, _) = watch::channel(StoreEvent::Init);
        Self {
            session: ArcSwapOption::empty(),
            catalog: ArcSwap::from_pointee(Catalog::default()),
            drafts: ArcSwap::from_pointee(Drafts::default()),
            events,
        }
    }

    /// Current session snapshot, if connected.
    pub fn session(&self) -> Option<Arc<Session>> {
        self.session.load_full()
    }

    /// Replace the session group wholesale.
    pub fn replace_session(&self, session: Session) {
        self.session.store(Some(Arc::new(session)));
        self.events.send_replace(StoreEvent::SessionReplaced);
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.load_full()
    }

    /// Replace the catalog wholesale.
    pub fn replace_catalog(&self, catalog: Catalog) {
        self.catalog.store(Arc::new(catalog));
        self.events.send_replace(StoreEvent::CatalogReplaced);
    }

    /// Current draft inputs.
    pub fn drafts(&self) -> Arc<Drafts> {
        self.drafts.load_full()
    }

    /// Replace the draft-input group wholesale.
    pub fn replace_drafts(&self, drafts: Drafts) {
        self.drafts.store(Arc::new(drafts));
        self.events.send_replace(StoreEvent::DraftsReplaced);
    }

    /// Subscribe to the change feed. Receivers see the latest event and
    /// re-read whichever snapshots they care about.
    pub fn subscribe(&self) -> watch::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::catalog::TokenItem;
    use alloy::primitives::{Address, U256};

    #[test]
    fn test_empty_store() {
        let store = Store::new();
        assert!(store.session().is_none());
        assert!(store.catalog().is_empty());
        assert_eq!(*store.drafts(), Drafts::default());
    }

    #[test]
    fn test_catalog_replaced_wholesale() {
        let store = Store::new();
        let before = store.catalog();

        store.replace_catalog(Catalog {
            items: vec![TokenItem {
                id: 1,
                uri: "ipfs://one".to_string(),
                owner: Address::ZERO,
                price: U256::ZERO,
            }],
            total_minted: 1,
        });

        let after = store.catalog();
        assert_eq!(before.len(), 0);
        assert_eq!(after.len(), 1);
        // The old snapshot is untouched; consumers holding it keep a
        // consistent view.
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn test_subscribers_see_replacements() {
        let store = Store::new();
        let mut rx = store.subscribe();

        store.replace_catalog(Catalog::default());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), StoreEvent::CatalogReplaced);

        store.replace_drafts(Drafts {
            mint_uri: "ipfs://draft".to_string(),
            price: String::new(),
        });
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), StoreEvent::DraftsReplaced);
    }
}
