//! Flat-file backend: one record per line, fully rewritten on save.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::codec::{self, Record};
use super::{PersistenceError, SnapshotStore, StoreSnapshot};

/// Read the data file at `path`.
///
/// A missing file is an empty store. Blank lines are ignored; malformed lines
/// are logged and skipped.
pub fn load(path: &Path) -> Result<StoreSnapshot, PersistenceError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no existing data file; starting with an empty store");
            return Ok(StoreSnapshot::default());
        }
        Err(source) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut snapshot = StoreSnapshot::default();
    let mut skipped = 0usize;
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let _record = tracing::info_span!("record", line = idx + 1).entered();
        match codec::decode_line(line) {
            Ok(Record::Item(item)) => snapshot.items.push(item),
            Ok(Record::User(user)) => snapshot.users.push(user),
            Err(err) => {
                skipped += 1;
                tracing::warn!(path = %path.display(), line = idx + 1, error = %err, "skipping malformed record");
            }
        }
    }

    tracing::info!(
        path = %path.display(),
        items = snapshot.items.len(),
        users = snapshot.users.len(),
        skipped,
        "loaded store data"
    );
    Ok(snapshot)
}

/// Overwrite the data file at `path` with `snapshot`.
pub fn save(path: &Path, snapshot: &StoreSnapshot) -> Result<(), PersistenceError> {
    std::fs::write(path, codec::encode_snapshot(snapshot)).map_err(|source| {
        PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(
        path = %path.display(),
        items = snapshot.items.len(),
        users = snapshot.users.len(),
        "saved store data"
    );
    Ok(())
}

/// [`SnapshotStore`] over a single data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<StoreSnapshot, PersistenceError> {
        load(&self.path)
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), PersistenceError> {
        save(&self.path, snapshot)
    }
}
