//! User-triggered mutation flows.
//!
//! Every flow is the same three-step sequence:
//! 1. validate local preconditions, failing fast with no remote call
//! 2. invoke the contract through the bound signer and await settlement
//! 3. clear the relevant draft input, then rebuild the catalog
//!
//! A failure in any step leaves the last-known-good catalog untouched:
//! refresh only runs after a confirmed mutation. Errors carry the
//! underlying reason so the display layer can surface it verbatim. Nothing
//! retries automatically.

pub mod buy;
pub mod list;
pub mod mint;

pub use buy::buy;
pub use list::list;
pub use mint::mint;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::contract::proxy::MarketContract;
use crate::contract::types::ContractError;
use crate::identity::types::IdentityError;
use crate::state::store::Store;

/// Errors surfaced at the flow boundary.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Local precondition failed; no remote call was attempted.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No session yet; connect first.
    #[error("not connected to a node")]
    NotConnected,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Contract(#[from] ContractError),
}

/// Bind a contract proxy to the current session snapshot.
pub(crate) fn market(store: &Store, config: &ClientConfig) -> Result<MarketContract, FlowError> {
    let session = store.session().ok_or(FlowError::NotConnected)?;
    Ok(MarketContract::bind(&session, &config.contract)?)
}
