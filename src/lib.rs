//! Client for a local single-node blockchain marketplace.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────┐
//!                 │                 MARKETPLACE CLIENT                │
//!                 │                                                  │
//!   User intent   │  ┌─────────┐   ┌──────────┐   ┌──────────────┐  │
//!   ──────────────┼─▶│  flows  │──▶│ contract │──▶│    chain     │──┼──▶ Node RPC
//!                 │  │mint/list│   │  proxy   │   │   client     │  │
//!                 │  │  /buy   │   └──────────┘   └──────┬───────┘  │
//!                 │  └────┬────┘                         │          │
//!                 │       │ confirmed                    │ reads    │
//!                 │       ▼                              ▼          │
//!                 │  ┌─────────┐                  ┌──────────────┐  │
//!   Display  ◀────┼──│  state  │◀─────────────────│     sync     │  │
//!                 │  │  store  │   full snapshot  │   refresh    │  │
//!                 │  └─────────┘                  └──────────────┘  │
//!                 │                                                  │
//!                 │  identity: node accounts → fallback keys → none  │
//!                 │  cross-cutting: config, observability            │
//!                 └──────────────────────────────────────────────────┘
//! ```
//!
//! Reads flow one way (chain → sync → store → display); writes round-trip
//! (display → flow → contract → chain → confirmation → refresh). The store
//! is the single piece of shared state and every group in it is replaced
//! wholesale, never patched.

// Core subsystems
pub mod chain;
pub mod contract;
pub mod flows;
pub mod identity;
pub mod sync;

// Shared state
pub mod state;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::schema::ClientConfig;
pub use state::store::Store;
