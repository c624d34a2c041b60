//! Identity resolution and switching.
//!
//! Resolution is a strict priority order: the node's own unlocked accounts
//! win; the bundled development keys are the fallback; with neither, the
//! session is read-only. The roster construction itself is a pure function
//! over `(node_accounts, credentials)` so it can be tested with fixed
//! inputs.
//!
//! Switching never trusts a previous resolution: it re-validates the
//! requested index against the same source the roster was built from, and
//! any failure leaves the previous session bound.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};

use crate::chain::client::ChainClient;
use crate::identity::keys;
use crate::identity::types::{
    Identity, IdentityError, IdentityOrigin, RosterSource, SignerBinding,
};
use crate::state::store::{Session, Store};

/// Build the identity roster from fixed inputs. Pure; no I/O.
///
/// Node accounts take priority: any non-empty list yields a NodeUnlocked
/// roster and the credentials are not consulted. Otherwise each credential
/// is validated independently and the survivors form the roster.
pub fn roster(node_accounts: &[Address], credentials: &[&str]) -> (Vec<Identity>, RosterSource) {
    if !node_accounts.is_empty() {
        let identities = node_accounts
            .iter()
            .map(|address| Identity {
                address: *address,
                credential: None,
                origin: IdentityOrigin::NodeUnlocked,
            })
            .collect();
        return (identities, RosterSource::Node);
    }

    let identities = keys::identities_from(credentials);
    if identities.is_empty() {
        (Vec::new(), RosterSource::Empty)
    } else {
        (identities, RosterSource::Fallback)
    }
}

/// Resolve the usable identities and bind the initial signer.
///
/// Never fails: the worst case is a read-only session. Signer-binding
/// problems are logged and degrade to read-only rather than aborting
/// startup.
pub async fn resolve(chain: ChainClient) -> Session {
    let node_accounts = chain.unlocked_accounts().await;
    let (identities, source) = roster(&node_accounts, &keys::DEV_PRIVATE_KEYS);

    let (active, binding) = match source {
        RosterSource::Node => {
            let from = identities[0].address;
            tracing::info!(
                address = %from,
                accounts = identities.len(),
                "using node unlocked signer"
            );
            (Some(0), Some(SignerBinding::Node { from }))
        }
        RosterSource::Fallback => {
            let credential = identities[0].credential.clone().unwrap_or_default();
            match bind_local(&chain, &credential) {
                Ok(binding) => {
                    tracing::info!(
                        address = %binding.address(),
                        keys = identities.len(),
                        "node reported no accounts; using development wallet signer"
                    );
                    (Some(0), Some(binding))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "could not bind fallback signer; reads only");
                    (None, None)
                }
            }
        }
        RosterSource::Empty => {
            tracing::warn!("no node accounts and no valid development keys; reads only");
            (None, None)
        }
    };

    Session {
        chain,
        identities,
        active,
        binding,
        source,
    }
}

/// Switch the active identity.
///
/// Re-validated on every call against the roster's own source:
/// - Node rosters re-query the live account list (it may have grown) and
///   bind a node signer for the requested position.
/// - Fallback rosters index the bundled credential table; the credential
///   is re-parsed at call time, so a malformed entry fails with a
///   signer-binding error rather than an index error.
///
/// On success the session is replaced wholesale; on any failure the
/// previous session stays bound.
pub async fn select(store: &Store, index: usize) -> Result<Identity, IdentityError> {
    let session = store.session().ok_or(IdentityError::NoneAvailable)?;

    match session.source {
        RosterSource::Node => {
            let live = session.chain.unlocked_accounts().await;
            if live.is_empty() {
                return Err(IdentityError::NoneAvailable);
            }
            if index >= live.len() {
                return Err(IdentityError::InvalidIndex {
                    index,
                    known: live.len(),
                });
            }

            let (identities, source) = roster(&live, &[]);
            let chosen = identities[index].clone();
            store.replace_session(Session {
                chain: session.chain.clone(),
                identities,
                active: Some(index),
                binding: Some(SignerBinding::Node {
                    from: chosen.address,
                }),
                source,
            });
            tracing::info!(address = %chosen.address, index, "switched to node signer");
            Ok(chosen)
        }
        RosterSource::Fallback => {
            if index >= keys::DEV_PRIVATE_KEYS.len() {
                return Err(IdentityError::InvalidIndex {
                    index,
                    known: keys::DEV_PRIVATE_KEYS.len(),
                });
            }

            let credential = keys::DEV_PRIVATE_KEYS[index];
            let binding = bind_local(&session.chain, credential)?;
            let chosen = Identity {
                address: binding.address(),
                credential: Some(credential.to_string()),
                origin: IdentityOrigin::FallbackKey,
            };

            let identities = keys::fallback_identities();
            let active = identities.iter().position(|i| i.address == chosen.address);
            store.replace_session(Session {
                chain: session.chain.clone(),
                identities,
                active,
                binding: Some(binding),
                source: RosterSource::Fallback,
            });
            tracing::info!(address = %chosen.address, index, "switched to development wallet signer");
            Ok(chosen)
        }
        RosterSource::Empty => Err(IdentityError::NoneAvailable),
    }
}

/// Build a locally-signing binding from a hex credential.
fn bind_local(chain: &ChainClient, credential: &str) -> Result<SignerBinding, IdentityError> {
    let signer = keys::parse_credential(credential)?;
    let from = signer.address();

    let url: url::Url = chain
        .rpc_url()
        .parse()
        .map_err(|e| IdentityError::SignerBinding(format!("invalid RPC URL: {e}")))?;

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(url)
        .erased();

    Ok(SignerBinding::Local { provider, from })
}
