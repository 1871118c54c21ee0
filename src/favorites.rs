//! Process-lifetime favorites list.
//!
//! Identifiers are opaque strings kept in first-added order without duplicates.
//! Nothing is persisted; a restart starts from an empty list.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::PlayerId;


#[derive(Debug, Default)]
pub struct FavoritesStore {
    ids: Mutex<Vec<String>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the Vec half-updated.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `id` unless it is blank or already present. Returns whether it was added.
    pub fn add(&self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() {
            return false;
        }

        let mut ids = self.lock();
        if ids.iter().any(|existing| existing == id) {
            return false;
        }
        ids.push(id.to_string());
        tracing::debug!(player_id = id, total = ids.len(), "favorite added");
        true
    }

    /// Remove `id` if present. Returns whether anything was removed.
    pub fn remove(&self, id: &str) -> bool {
        let id = id.trim();
        let mut ids = self.lock();
        match ids.iter().position(|existing| existing == id) {
            Some(index) => {
                ids.remove(index);
                tracing::debug!(player_id = id, total = ids.len(), "favorite removed");
                true
            }
            None => false,
        }
    }

    /// Snapshot of the stored identifiers in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        let id = id.trim();
        self.lock().iter().any(|existing| existing == id)
    }

    /// The stored entry that names `player`, exactly or as a numeric spelling like `"0237"`.
    pub fn stored_id_for(&self, player: PlayerId) -> Option<String> {
        let exact = player.to_string();
        self.lock()
            .iter()
            .find(|existing| {
                **existing == exact || existing.parse::<PlayerId>().is_ok_and(|id| id == player)
            })
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
