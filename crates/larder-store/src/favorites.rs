use std::sync::Arc;

use bytes::Bytes;
use larder_core::share::{export_file_name, to_export_json};
use larder_core::{Favorites, Recipe};
use tracing::{debug, warn};

use crate::{export_key, ObjectStore, StoreError, FAVORITES_KEY};

/// Persists the favorites list as one JSON blob under [`FAVORITES_KEY`].
///
/// Reads and writes never fail from the caller's point of view: a missing or
/// unreadable blob loads as an empty list, and failed saves are only logged.
#[derive(Clone)]
pub struct FavoritesRepo {
    store: Arc<dyn ObjectStore>,
}

impl FavoritesRepo {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Favorites {
        let raw = match self.store.get_opt(FAVORITES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Favorites::new(),
            Err(e) => {
                warn!("favorites: read failed, starting empty: {e}");
                return Favorites::new();
            }
        };
        let text = match std::str::from_utf8(&raw) {
            Ok(text) => text,
            Err(e) => {
                warn!("favorites: blob is not utf-8, starting empty: {e}");
                return Favorites::new();
            }
        };
        match Favorites::try_from_json(text) {
            Ok(favorites) => {
                debug!("favorites: loaded {} recipes", favorites.len());
                favorites
            }
            Err(e) => {
                warn!("favorites: blob is corrupt, starting empty: {e}");
                Favorites::new()
            }
        }
    }

    /// Best-effort write of the whole list.
    pub async fn save(&self, favorites: &Favorites) {
        if let Err(e) = self.try_save(favorites).await {
            warn!("favorites: save failed: {e}");
        }
    }

    pub async fn try_save(&self, favorites: &Favorites) -> Result<(), StoreError> {
        let json = favorites
            .to_json()
            .map_err(|e| StoreError::Internal(format!("encode favorites: {e}")))?;
        self.store.put(FAVORITES_KEY, Bytes::from(json)).await?;
        debug!("favorites: saved {} recipes", favorites.len());
        Ok(())
    }

    /// Load, add, save. Returns the updated list.
    pub async fn add(&self, recipe: Recipe) -> Favorites {
        let mut favorites = self.load().await;
        favorites.add(recipe);
        self.save(&favorites).await;
        favorites
    }

    /// Load, remove by id, save if anything changed. Returns whether it was present.
    pub async fn remove(&self, id: &str) -> bool {
        let mut favorites = self.load().await;
        let removed = favorites.remove(id);
        if removed {
            self.save(&favorites).await;
        }
        removed
    }

    pub async fn clear(&self) {
        self.save(&Favorites::new()).await;
    }
}

/// Write a pretty-printed copy of the recipe under `exports/<slug>.json`.
/// Returns the key it was written to.
pub async fn export_recipe(store: &dyn ObjectStore, recipe: &Recipe) -> Result<String, StoreError> {
    let json = to_export_json(recipe)
        .map_err(|e| StoreError::Internal(format!("encode recipe: {e}")))?;
    let key = export_key(&export_file_name(recipe));
    store.put(&key, Bytes::from(json)).await?;
    Ok(key)
}
