use std::sync::Mutex;

use super::{PersistenceError, SnapshotStore, StoreSnapshot};

/// In-memory snapshot backend for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: Mutex<StoreSnapshot>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    /// Copy of whatever was saved last.
    pub fn snapshot(&self) -> StoreSnapshot {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<StoreSnapshot, PersistenceError> {
        Ok(self.snapshot())
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), PersistenceError> {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = snapshot.clone();
        Ok(())
    }
}
