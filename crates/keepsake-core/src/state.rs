//! Favorites state: the ordered set of favorited lesson ids.
//!
//! `FavoritesState` is the single owner of the collection and the only
//! component that writes through the store adapter. Every successful
//! mutation persists synchronously before the call returns, so in-memory
//! and persisted state never diverge by more than the write in flight.

use keepsake_store::{FavoritesStore, Storage};

/// In-memory favorites collection backed by a [`FavoritesStore`].
///
/// Insertion order is preserved and each id appears at most once.
#[derive(Debug)]
pub struct FavoritesState<S> {
    items: Vec<String>,
    store: FavoritesStore<S>,
}

impl<S: Storage> FavoritesState<S> {
    /// Construct the state at host startup, hydrating from the store.
    pub fn hydrate(store: FavoritesStore<S>) -> Self {
        let items = store.load();
        log::info!("hydrated {} favorite(s)", items.len());
        Self { items, store }
    }

    /// Whether `id` is currently favorited.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i == id)
    }

    /// Insert `id` if absent. Returns true iff the insertion occurred.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id.to_string());
        self.store.save(&self.items);
        true
    }

    /// Remove `id` if present. Returns true iff the removal occurred.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|i| i == id) else {
            return false;
        };
        self.items.remove(index);
        self.store.save(&self.items);
        true
    }

    /// Flip membership of `id`. Returns the new membership (true = now
    /// favorited).
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    /// The favorited ids, in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.items
    }

    /// Number of favorited ids.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no ids are favorited.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
