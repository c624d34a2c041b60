//! Interactive marketplace client.
//!
//! Startup order: CLI args → config (file + overrides) → logging →
//! validation → chain connect → identity resolution → initial catalog
//! refresh → command shell. The shell is a thin display layer: it reads
//! intents from stdin, hands them to the flows, and prints store
//! snapshots.

use std::path::PathBuf;
use std::sync::Arc;

use alloy::primitives::{utils::format_ether, utils::parse_ether, U256};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use marketplace_client::chain::ChainClient;
use marketplace_client::config::{loader, validation, ClientConfig};
use marketplace_client::contract::MarketContract;
use marketplace_client::flows;
use marketplace_client::identity;
use marketplace_client::observability::{logging, metrics};
use marketplace_client::state::{Drafts, Store, StoreEvent};
use marketplace_client::sync;

#[derive(Parser)]
#[command(name = "marketplace-client")]
#[command(about = "Client for a local single-node NFT marketplace", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Marketplace contract address (overrides the config file).
    #[arg(long)]
    contract: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::parse_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(address) = cli.contract {
        config.contract.address = address;
    } else if config.contract.address.is_empty() {
        // The deploy step exports the address; pick it up when nothing
        // else set one.
        if let Ok(address) = std::env::var("MARKET_CONTRACT_ADDRESS") {
            config.contract.address = address;
        }
    }

    logging::init(&config.observability.log_level);

    if let Err(errors) = validation::validate_config(&config) {
        for e in &errors {
            tracing::error!(field = e.field, "{}", e.message);
        }
        return Err("configuration invalid".into());
    }

    tracing::info!(
        rpc_url = %config.node.rpc_url,
        contract = %config.contract.address,
        "marketplace-client starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = Arc::new(Store::new());

    let chain = ChainClient::connect(config.node.clone()).await?;
    let session = identity::resolve(chain).await;
    match session.active_identity() {
        Some(active) => tracing::info!(address = %active.address, origin = ?active.origin, "signer bound"),
        None => tracing::warn!("no signer available; marketplace is read-only"),
    }
    store.replace_session(session);

    // Display-layer subscription: log catalog replacements as they land.
    let mut events = store.subscribe();
    let feed_store = store.clone();
    tokio::spawn(async move {
        while events.changed().await.is_ok() {
            let event = *events.borrow_and_update();
            if event == StoreEvent::CatalogReplaced {
                tracing::debug!(items = feed_store.catalog().len(), "catalog replaced");
            }
        }
    });

    // Initial refresh, now that the proxy is available.
    if let Some(session) = store.session() {
        match MarketContract::bind(&session, &config.contract) {
            Ok(contract) => {
                if let Err(e) = sync::refresh(&store, &contract).await {
                    tracing::warn!(error = %e, "initial refresh failed");
                }
            }
            Err(e) => tracing::warn!(error = %e, "contract binding failed"),
        }
    }

    run_shell(store, config).await
}

async fn run_shell(
    store: Arc<Store>,
    config: ClientConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    use std::io::Write;

    println!("marketplace-client -- type `help` for commands");
    print_accounts(&store);
    print_catalog(&store);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["help"] => print_help(),
            ["accounts"] => print_accounts(&store),
            ["ls"] => print_catalog(&store),
            ["quit"] | ["exit"] => break,

            ["use", index] => match index.parse::<usize>() {
                Ok(index) => match identity::select(&store, index).await {
                    Ok(identity) => println!("now signing as {}", identity.address),
                    Err(e) => eprintln!("error: {e}"),
                },
                Err(_) => eprintln!("error: `use` takes an account index"),
            },

            ["refresh"] => match store.session() {
                None => eprintln!("error: not connected"),
                Some(session) => match MarketContract::bind(&session, &config.contract) {
                    Ok(contract) => match sync::refresh(&store, &contract).await {
                        Ok(_) => print_catalog(&store),
                        Err(e) => eprintln!("error: {e}"),
                    },
                    Err(e) => eprintln!("error: {e}"),
                },
            },

            ["mint", uri] => {
                store.replace_drafts(Drafts {
                    mint_uri: uri.to_string(),
                    ..(*store.drafts()).clone()
                });
                match flows::mint(&store, &config, uri).await {
                    Ok(receipt) => {
                        println!("minted in tx {}", receipt.transaction_hash);
                        print_catalog(&store);
                    }
                    Err(e) => eprintln!("mint failed: {e}"),
                }
            }

            ["sell", id, price_eth] => {
                let Ok(id) = id.parse::<u64>() else {
                    eprintln!("error: `sell` takes a token id and a price in ETH");
                    continue;
                };
                let price = match parse_ether(price_eth) {
                    Ok(price) => price,
                    Err(e) => {
                        eprintln!("error: bad price: {e}");
                        continue;
                    }
                };
                store.replace_drafts(Drafts {
                    price: price_eth.to_string(),
                    ..(*store.drafts()).clone()
                });
                match flows::list(&store, &config, id, price).await {
                    Ok(receipt) => {
                        println!("listed in tx {}", receipt.transaction_hash);
                        print_catalog(&store);
                    }
                    Err(e) => eprintln!("list failed: {e}"),
                }
            }

            ["buy", id] => {
                let Ok(id) = id.parse::<u64>() else {
                    eprintln!("error: `buy` takes a token id");
                    continue;
                };
                let price = store
                    .catalog()
                    .get(id)
                    .map(|token| token.price)
                    .unwrap_or(U256::ZERO);
                match flows::buy(&store, &config, id, price).await {
                    Ok(receipt) => {
                        println!("bought in tx {}", receipt.transaction_hash);
                        print_catalog(&store);
                    }
                    Err(e) => eprintln!("buy failed: {e}"),
                }
            }

            _ => eprintln!("unknown command; type `help`"),
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  accounts           list known identities");
    println!("  use <index>        switch the signing identity");
    println!("  ls                 show the catalog");
    println!("  mint <uri>         mint a token with a metadata URI");
    println!("  sell <id> <eth>    list a token for sale");
    println!("  buy <id>           buy a listed token at its asking price");
    println!("  refresh            rebuild the catalog from chain state");
    println!("  quit               exit");
}

fn print_accounts(store: &Store) {
    let Some(session) = store.session() else {
        println!("not connected");
        return;
    };
    if session.identities.is_empty() {
        println!("no identities available (read-only)");
        return;
    }
    for (index, identity) in session.identities.iter().enumerate() {
        let marker = if session.active == Some(index) { "*" } else { " " };
        println!("{marker} [{index}] {} ({:?})", identity.address, identity.origin);
    }
}

fn print_catalog(store: &Store) {
    let catalog = store.catalog();
    if catalog.is_empty() {
        println!("no tokens yet; mint one to start");
        return;
    }
    for token in &catalog.items {
        let listing = if token.is_listed() {
            format!("{} ETH", format_ether(token.price))
        } else {
            "not listed".to_string()
        };
        println!(
            "#{:<4} owner {}  {}  {}",
            token.id, token.owner, listing, token.uri
        );
    }
}
