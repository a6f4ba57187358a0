//! Infrastructure layer: the store itself, sessions, persistence, config.
//!
//! Hosts install logging with `bazaar_observability::init()` before calling
//! [`Store::load`]; without a subscriber the store's `tracing` events are
//! discarded.

pub mod config;
pub mod persistence;
pub mod session;
pub mod store;

pub use config::StoreConfig;
pub use persistence::{FileSnapshotStore, PersistenceError, SnapshotStore, StoreSnapshot};
pub use session::Session;
pub use store::Store;
