//! Store persistence boundary.
//!
//! The whole store is loaded once at startup and written back in full at
//! shutdown. Backends only move [`StoreSnapshot`]s; they never see individual
//! operations.

pub mod codec;
pub mod file;
pub mod in_memory;

use std::path::PathBuf;

use thiserror::Error;

use bazaar_auth::User;
use bazaar_inventory::Item;

pub use codec::{DecodeError, Record};
pub use file::{FileSnapshotStore, load, save};
pub use in_memory::InMemorySnapshotStore;

/// Everything that survives a restart: inventory and user records, in
/// collection order. Carts are not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub items: Vec<Item>,
    pub users: Vec<User>,
}

impl StoreSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.users.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read store data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write store data to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load/save pair for whole-store snapshots.
pub trait SnapshotStore {
    /// Load the persisted snapshot. Absence of prior data is an empty snapshot,
    /// not an error.
    fn load(&self) -> Result<StoreSnapshot, PersistenceError>;

    /// Replace the persisted snapshot with `snapshot`.
    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), PersistenceError>;
}
