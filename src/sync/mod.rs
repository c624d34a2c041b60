//! Marketplace state synchronization.
//!
//! # Data Flow
//! ```text
//! contract proxy (totalMinted, per-token reads)
//!     → refresh.rs (full snapshot rebuild, per-id degradation)
//!     → catalog.rs types
//!     → store (atomic swap, change notification)
//! ```
//!
//! Refreshes happen once when the proxy first becomes available and once
//! after every successful mutation flow. Never on a timer: staleness
//! between triggers is accepted.

pub mod catalog;
pub mod refresh;

pub use catalog::{Catalog, TokenItem};
pub use refresh::refresh;
