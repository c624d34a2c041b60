//! Contract-call error definitions.

use thiserror::Error;

/// Errors from invoking the marketplace contract.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Contract address or binding configuration is unusable.
    #[error("contract misconfigured: {0}")]
    Config(String),

    /// Mutation attempted without a bound signer.
    #[error("no signer bound; select an identity first")]
    NoSigner,

    /// The contract rejected the call; carries the node-provided reason.
    #[error("rejected by contract: {0}")]
    Rejected(String),

    /// Transport or node-level failure.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// One token could not be read. Degrades that entry only; a catalog
    /// rebuild omits the id instead of failing.
    #[error("token {id} unreadable: {reason}")]
    TokenRead { id: u64, reason: String },
}

/// Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

/// Split contract-level reverts from transport noise.
///
/// The node embeds revert reasons in the error payload; anything carrying
/// one is a rejection the user should see verbatim.
pub fn classify(err: alloy::contract::Error) -> ContractError {
    let text = err.to_string();
    if text.contains("revert") || text.contains("execution reverted") {
        ContractError::Rejected(text)
    } else {
        ContractError::Rpc(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_signer_display() {
        assert_eq!(
            ContractError::NoSigner.to_string(),
            "no signer bound; select an identity first"
        );
    }

    #[test]
    fn test_token_read_display() {
        let err = ContractError::TokenRead {
            id: 2,
            reason: "missing trie node".to_string(),
        };
        assert!(err.to_string().contains("token 2"));
    }
}
