//! Identity and signer-binding types.

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use thiserror::Error;

/// Where an identity's signing capability comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityOrigin {
    /// The account is unlocked on the node; the node signs for it.
    NodeUnlocked,
    /// Derived from a bundled development key; signing happens client-side.
    FallbackKey,
}

/// Which source produced the current identity roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSource {
    Node,
    Fallback,
    Empty,
}

/// One usable signing identity.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub address: Address,
    /// Raw hex private key for fallback identities; `None` for node
    /// accounts. Never logged.
    pub credential: Option<String>,
    pub origin: IdentityOrigin,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("address", &self.address)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("origin", &self.origin)
            .finish()
    }
}

/// The active identity's signing capability.
#[derive(Clone)]
pub enum SignerBinding {
    /// Transactions are submitted unsigned; the node signs with its
    /// unlocked account.
    Node { from: Address },
    /// Wallet-layered provider that signs locally before submission.
    Local { provider: DynProvider, from: Address },
}

impl SignerBinding {
    /// The address this binding signs for.
    pub fn address(&self) -> Address {
        match self {
            SignerBinding::Node { from } => *from,
            SignerBinding::Local { from, .. } => *from,
        }
    }
}

impl std::fmt::Debug for SignerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignerBinding::Node { from } => f.debug_struct("Node").field("from", from).finish(),
            SignerBinding::Local { from, .. } => {
                f.debug_struct("Local").field("from", from).finish()
            }
        }
    }
}

/// Errors from identity resolution and switching.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No node accounts and no valid fallback credentials.
    #[error("no identity available; operating read-only")]
    NoneAvailable,

    /// Requested index is outside the roster source's bounds.
    #[error("invalid identity index {index} (known: {known})")]
    InvalidIndex { index: usize, known: usize },

    /// Signer construction failed for an otherwise known index.
    #[error("signer binding failed: {0}")]
    SignerBinding(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_credential() {
        let identity = Identity {
            address: Address::ZERO,
            credential: Some("0xdeadbeef".to_string()),
            origin: IdentityOrigin::FallbackKey,
        };
        let printed = format!("{identity:?}");
        assert!(!printed.contains("deadbeef"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_error_display() {
        let err = IdentityError::InvalidIndex { index: 5, known: 2 };
        assert_eq!(err.to_string(), "invalid identity index 5 (known: 2)");
    }
}
