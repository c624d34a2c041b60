//! Marketplace contract subsystem.
//!
//! # Data Flow
//! ```text
//! session snapshot (connection + signer binding)
//!     → proxy.rs (typed handle over the fixed call surface)
//!     → abi.rs (sol!-generated bindings)
//!     → confirm.rs (receipt polling until settled)
//! ```
//!
//! Ownership and payment rules live in the contract; this subsystem only
//! invokes them and reports what the node says.

pub mod abi;
pub mod confirm;
pub mod proxy;
pub mod types;

pub use proxy::MarketContract;
pub use types::{ContractError, ContractResult};
