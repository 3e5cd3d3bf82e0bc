//! # Storage Backends
//!
//! A [`ResourceActor`](crate::ResourceActor) keeps its records in an [`EntityStore`]. The actor
//! owns the store exclusively, so implementations need no interior locking.
//!
//! - [`MemoryStore`]: an ordered in-memory table.
//! - [`JsonSnapshotStore`]: a memory table that writes all of its records to a JSON file when
//!   flushed. The actor flushes once, when its channel closes.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backend holding the records of one table.
pub trait EntityStore<T: StoreEntity>: Send {
    fn contains(&self, id: &T::Id) -> bool;

    fn get(&self, id: &T::Id) -> Option<&T>;

    fn insert(&mut self, id: T::Id, item: T);

    /// All records in key order.
    fn values(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Persist buffered state. Called when the owning actor shuts down.
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-memory table ordered by primary key.
pub struct MemoryStore<T: StoreEntity> {
    rows: BTreeMap<T::Id, T>,
}

impl<T: StoreEntity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<T: StoreEntity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> EntityStore<T> for MemoryStore<T> {
    fn contains(&self, id: &T::Id) -> bool {
        self.rows.contains_key(id)
    }

    fn get(&self, id: &T::Id) -> Option<&T> {
        self.rows.get(id)
    }

    fn insert(&mut self, id: T::Id, item: T) {
        self.rows.insert(id, item);
    }

    fn values(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.rows.values())
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Memory table that snapshots its rows to `<dir>/<table>.json` on flush.
///
/// Every context starts empty; an existing snapshot file is overwritten.
pub struct JsonSnapshotStore<T: StoreEntity> {
    rows: MemoryStore<T>,
    path: PathBuf,
}

impl<T: StoreEntity + Serialize> JsonSnapshotStore<T> {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            rows: MemoryStore::new(),
            path: dir.as_ref().join(format!("{}.json", T::TABLE)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: StoreEntity + Serialize> EntityStore<T> for JsonSnapshotStore<T> {
    fn contains(&self, id: &T::Id) -> bool {
        self.rows.contains(id)
    }

    fn get(&self, id: &T::Id) -> Option<&T> {
        self.rows.get(id)
    }

    fn insert(&mut self, id: T::Id, item: T) {
        self.rows.insert(id, item);
    }

    fn values(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        self.rows.values()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }
        let rows: Vec<&T> = self.rows.values().collect();
        let json = serde_json::to_string_pretty(&rows)?;
        std::fs::write(&self.path, json).map_err(io_err)?;
        debug!(table = T::TABLE, path = %self.path.display(), rows = rows.len(), "Snapshot written");
        Ok(())
    }
}
