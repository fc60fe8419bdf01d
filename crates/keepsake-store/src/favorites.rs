//! Persistent store adapter for the favorites collection.
//!
//! Wraps a [`Storage`] and owns the serialization of the favorites
//! collection: a JSON array of string identifiers under one fixed key.
//! Persistence is best-effort. `load` never fails to the caller and
//! `save` never propagates an error; storage failures and malformed
//! blobs degrade to an empty collection / a no-op, logged at `warn`.

use crate::Storage;

/// Fixed key the favorites collection is stored under.
pub const FAVORITES_KEY: &str = "favorites";

/// Serializing adapter between the favorites collection and a [`Storage`].
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
}

impl<S: Storage> FavoritesStore<S> {
    /// Wrap a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted collection.
    ///
    /// An absent key, a read failure, and an unparsable value all yield
    /// an empty collection. Duplicate ids in a tampered blob are dropped,
    /// keeping the first occurrence, so callers can rely on the
    /// no-duplicates invariant from hydration onward.
    pub fn load(&self) -> Vec<String> {
        let blob = match self.storage.get(FAVORITES_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to read favorites: {e}");
                return Vec::new();
            },
        };
        let ids: Vec<String> = match serde_json::from_slice(&blob) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("malformed favorites blob, starting empty: {e}");
                return Vec::new();
            },
        };
        let mut seen = Vec::with_capacity(ids.len());
        for id in ids {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        seen
    }

    /// Persist the collection. Failures are logged, not propagated.
    pub fn save(&mut self, ids: &[String]) {
        let blob = match serde_json::to_vec(ids) {
            Ok(blob) => blob,
            Err(e) => {
                log::warn!("failed to encode favorites: {e}");
                return;
            },
        };
        if let Err(e) = self.storage.set(FAVORITES_KEY, &blob) {
            log::warn!("failed to save favorites: {e}");
        }
    }
}
