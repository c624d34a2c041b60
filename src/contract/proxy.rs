//! Typed handle bound to one identity.
//!
//! # Responsibilities
//! - Bind the active identity's signing capability to the fixed call
//!   surface
//! - Serve read-only queries without a signer
//! - Await settlement on every mutation before returning
//!
//! Re-binding is transparent: the proxy is rebuilt from the current
//! session snapshot, so an identity switch changes the signer used by the
//! next call without touching in-flight ones. No state is updated
//! speculatively; callers see the receipt only after confirmation.

use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionReceipt;

use crate::chain::client::ChainClient;
use crate::config::schema::ContractConfig;
use crate::contract::abi::NftMarketplace;
use crate::contract::confirm;
use crate::contract::types::{classify, ContractError, ContractResult};
use crate::identity::types::SignerBinding;
use crate::state::store::Session;
use crate::sync::catalog::TokenItem;

/// Typed marketplace handle built from a session snapshot.
#[derive(Clone)]
pub struct MarketContract {
    chain: ChainClient,
    address: Address,
    binding: Option<SignerBinding>,
    confirmations: u32,
    poll_interval: Duration,
}

impl MarketContract {
    /// Bind to the current session.
    ///
    /// Reads always work; mutations additionally require the session to
    /// carry a signer binding.
    pub fn bind(session: &Session, config: &ContractConfig) -> ContractResult<Self> {
        let address: Address = config.address.parse().map_err(|e| {
            ContractError::Config(format!("invalid contract address '{}': {e}", config.address))
        })?;

        Ok(Self {
            chain: session.chain.clone(),
            address,
            binding: session.binding.clone(),
            confirmations: config.confirmation_blocks,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        })
    }

    /// The bound signer address, if any.
    pub fn signer_address(&self) -> Option<Address> {
        self.binding.as_ref().map(|b| b.address())
    }

    /// Authoritative total-minted counter.
    pub async fn total_minted(&self) -> ContractResult<u64> {
        let total = self
            .reader()
            .totalMinted()
            .call()
            .await
            .map_err(classify)?;
        u64::try_from(total).map_err(|_| ContractError::Rpc("totalMinted out of range".to_string()))
    }

    /// Read one token's metadata, owner, and listing.
    ///
    /// Three independent sub-reads; any failure surfaces as this id being
    /// unreadable. The caller decides whether that degrades a larger
    /// operation.
    pub async fn token(&self, id: u64) -> ContractResult<TokenItem> {
        let contract = self.reader();
        let token_id = U256::from(id);

        let uri = contract
            .tokenURI(token_id)
            .call()
            .await
            .map_err(|e| token_read(id, e))?;
        let owner = contract
            .ownerOf(token_id)
            .call()
            .await
            .map_err(|e| token_read(id, e))?;
        let listing = contract
            .listings(token_id)
            .call()
            .await
            .map_err(|e| token_read(id, e))?;

        Ok(TokenItem {
            id,
            uri,
            owner,
            price: listing.price,
        })
    }

    /// Mint a new token carrying `uri`. Blocks until confirmed.
    pub async fn mint(&self, uri: &str) -> ContractResult<TransactionReceipt> {
        let (contract, from) = self.writer()?;
        let pending = contract
            .mintNFT(uri.to_string())
            .from(from)
            .send()
            .await
            .map_err(classify)?;
        self.confirmed(*pending.tx_hash()).await
    }

    /// Put a token up for sale at `price` wei. Ownership is enforced by
    /// the contract, not locally.
    pub async fn list(&self, id: u64, price: U256) -> ContractResult<TransactionReceipt> {
        let (contract, from) = self.writer()?;
        let pending = contract
            .listToken(U256::from(id), price)
            .from(from)
            .send()
            .await
            .map_err(classify)?;
        self.confirmed(*pending.tx_hash()).await
    }

    /// Buy a listed token, paying `price` wei. A price that no longer
    /// matches the listing is rejected by the contract.
    pub async fn buy(&self, id: u64, price: U256) -> ContractResult<TransactionReceipt> {
        let (contract, from) = self.writer()?;
        let pending = contract
            .buyToken(U256::from(id))
            .value(price)
            .from(from)
            .send()
            .await
            .map_err(classify)?;
        self.confirmed(*pending.tx_hash()).await
    }

    /// Read-only instance over the plain connection.
    fn reader(&self) -> NftMarketplace::NftMarketplaceInstance<DynProvider> {
        NftMarketplace::new(self.address, self.chain.provider().clone())
    }

    /// Instance carrying the active signing capability.
    fn writer(
        &self,
    ) -> ContractResult<(NftMarketplace::NftMarketplaceInstance<DynProvider>, Address)> {
        match &self.binding {
            None => Err(ContractError::NoSigner),
            Some(SignerBinding::Node { from }) => Ok((self.reader(), *from)),
            Some(SignerBinding::Local { provider, from }) => Ok((
                NftMarketplace::new(self.address, provider.clone()),
                *from,
            )),
        }
    }

    async fn confirmed(&self, tx_hash: TxHash) -> ContractResult<TransactionReceipt> {
        confirm::wait_for_confirmation(&self.chain, tx_hash, self.confirmations, self.poll_interval)
            .await
    }
}

fn token_read(id: u64, err: alloy::contract::Error) -> ContractError {
    ContractError::TokenRead {
        id,
        reason: err.to_string(),
    }
}

impl std::fmt::Debug for MarketContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketContract")
            .field("address", &self.address)
            .field("signer", &self.signer_address())
            .field("confirmations", &self.confirmations)
            .finish()
    }
}
