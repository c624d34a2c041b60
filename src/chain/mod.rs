//! Node connection subsystem.
//!
//! # Data Flow
//! ```text
//! config (rpc_url, chain_id)
//!     → client.rs (single-endpoint provider, account enumeration)
//!     → consumed by identity resolution, the contract proxy, and
//!       confirmation polling
//! ```
//!
//! # Constraints
//! - One node, one endpoint: no failover
//! - No per-call timeouts and no automatic retries; a failure is reported
//!   and the next attempt is an explicit user action

pub mod client;
pub mod types;

pub use client::ChainClient;
pub use types::{ChainError, ChainId};
