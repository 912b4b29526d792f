use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::favorites::store::{KeyValueStore, StoreError};

/// Storage key holding the JSON array of favorite ids.
pub const FAVORITES_KEY: &str = "favorites";

/// The favorited career ids. Hydrated once from storage at startup; after that the
/// in-memory copy is authoritative and storage is only written, never re-read.
///
/// Ids are not checked against the catalog, so stale ids survive catalog changes.
pub struct FavoritesRegistry {
    ids: Vec<String>,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl FavoritesRegistry {
    /// Reads the persisted set. Missing, empty or corrupt values yield an empty set.
    pub fn hydrate(store: Box<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => parse_ids(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read persisted favorites, starting empty: {e}");
                Vec::new()
            }
        };
        info!("Favorites hydrated: {} ids", ids.len());
        Self {
            ids,
            store: Some(Arc::from(store)),
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Adds `id` if absent, removes it if present, then writes the whole set
    /// before returning. The write runs on the blocking pool so file I/O never
    /// stalls a runtime worker. A failed write drops to in-memory mode for the session.
    pub async fn toggle(&mut self, id: &str) -> &[String] {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
        debug!("Favorite toggled: {id} (now {} ids)", self.ids.len());

        if let Err(e) = self.flush().await {
            warn!("Favorites storage unavailable, continuing in memory only: {e}");
            self.store = None;
        }
        &self.ids
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    async fn flush(&self) -> Result<(), StoreError> {
        let Some(store) = self.store.clone() else {
            return Ok(());
        };
        let payload = serde_json::to_string(&self.ids)?;
        tokio::task::spawn_blocking(move || store.set(FAVORITES_KEY, &payload)).await?
    }
}

fn parse_ids(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(ids) => {
            let mut unique: Vec<String> = Vec::with_capacity(ids.len());
            for id in ids {
                if !unique.contains(&id) {
                    unique.push(id);
                }
            }
            unique
        }
        Err(e) => {
            warn!("Persisted favorites are malformed, starting empty: {e}");
            Vec::new()
        }
    }
}
