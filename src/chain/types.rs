//! Chain-level types and error definitions.

use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur while talking to the node.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Endpoint unusable or node unreachable. Fatal to further operation
    /// until the user retries.
    #[error("connection error: {0}")]
    Connection(String),

    /// A JSON-RPC request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Connected node reports a different chain than configured.
    #[error("chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
