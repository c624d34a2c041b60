//! Identity resolution subsystem.
//!
//! # Data Flow
//! ```text
//! node accounts (two query forms, first non-empty wins)
//!     → roster of NodeUnlocked identities, node signer for index 0
//! otherwise bundled development keys
//!     → per-key validation (malformed keys skipped),
//!       local wallet signer for the first survivor
//! otherwise
//!     → empty roster, read-only operation
//! ```
//!
//! # Security Constraints
//! - The bundled keys are public development material, never real funds
//! - Key material is never logged; `Identity`'s Debug output redacts it
//! - Switching re-validates against the same source the roster was built
//!   from; a failed switch leaves the previous binding untouched

pub mod keys;
pub mod resolver;
pub mod types;

pub use resolver::{resolve, select};
pub use types::{Identity, IdentityError, IdentityOrigin, RosterSource, SignerBinding};
