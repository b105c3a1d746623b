// src/snapshot.rs
// =============================================================================
// Last observed content of every monitored file, keyed by (site, path).
//
// In-memory only: snapshots live for the lifetime of the process and are
// never evicted. The store is owned by whoever runs the scheduler and lent
// to one poll cycle at a time.
// =============================================================================

use std::collections::HashMap;

use crate::types::SnapshotKey;

#[derive(Debug, Default)]
pub struct SnapshotStore {
    entries: HashMap<SnapshotKey, String>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content from the last successful fetch, or None if never observed.
    pub fn get(&self, key: &SnapshotKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Unconditional overwrite; the latest fetch wins.
    pub fn put(&mut self, key: SnapshotKey, content: String) {
        self.entries.insert(key, content);
    }

    pub fn contains(&self, key: &SnapshotKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
