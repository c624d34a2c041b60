//! Shared client state.

pub mod store;

pub use store::{Drafts, Session, Store, StoreEvent};
