//! Favorited movie ids, persisted as an ordered JSON array

use std::sync::{Arc, Mutex};

use super::storage::{JsonStore, StorageError, FAVORITES_KEY};
use super::types::{MovieId, MovieSummary};

/// Favorites backed directly by the persisted list.
///
/// Nothing is cached in memory: every call reads the stored array, and every
/// mutation rewrites it whole. Clones share one write lock, so toggles never
/// interleave their read-modify-write.
#[derive(Clone)]
pub struct FavoritesStore {
    store: JsonStore,
    write_lock: Arc<Mutex<()>>,
}

impl FavoritesStore {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Ids in insertion order
    pub fn ids(&self) -> Vec<MovieId> {
        self.store.read_json(FAVORITES_KEY, Vec::new())
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.ids().contains(&id)
    }

    /// Add the movie if absent, remove it if present. Returns the new membership.
    pub fn toggle(&self, movie: &MovieSummary) -> Result<bool, StorageError> {
        self.toggle_id(movie.id)
    }

    pub fn toggle_id(&self, id: MovieId) -> Result<bool, StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("favorites lock poisoned".to_string()))?;

        let mut ids = self.ids();
        let now_favorite = match ids.iter().position(|fav| *fav == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };

        self.store.write_json(FAVORITES_KEY, &ids)?;
        tracing::debug!(movie_id = id, favorite = now_favorite, total = ids.len(), "Favorites updated");
        Ok(now_favorite)
    }
}
