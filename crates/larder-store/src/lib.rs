mod favorites;
mod local;
mod memory;

pub use favorites::{export_recipe, FavoritesRepo};
pub use local::{default_data_dir, LocalStore};
pub use memory::MemoryStore;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Internal(String),
}

/// A store for opaque blobs keyed by string paths.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write (create or overwrite) an object.
    async fn put(&self, key: &str, data: Bytes) -> Result<(), StoreError>;

    /// Read an object. Returns `StoreError::NotFound` if absent.
    async fn get(&self, key: &str) -> Result<Bytes, StoreError>;

    /// Read an object, returning `None` if it does not exist.
    async fn get_opt(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        match self.get(key).await {
            Ok(data) => Ok(Some(data)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delete an object. No-op if absent.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check if an object exists.
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        match self.get(key).await {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

// -- Key helpers --

/// The single blob holding every saved recipe.
pub const FAVORITES_KEY: &str = "favorites/recipes.json";

pub fn export_key(file_name: &str) -> String {
    format!("exports/{file_name}")
}

// -- Configuration --

/// Configuration for the object store backend.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Local filesystem base directory.
    pub data_dir: Option<PathBuf>,
    /// Keep everything in memory; nothing survives the process.
    pub ephemeral: bool,
}

impl StoreConfig {
    /// Build from environment variables.
    /// `LARDER_DATA_DIR` picks the data directory; `LARDER_EPHEMERAL=1`
    /// switches to the in-memory store.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var_os("LARDER_DATA_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            ephemeral: std::env::var("LARDER_EPHEMERAL")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

// -- Factory --

/// Create an `ObjectStore` from configuration.
pub fn create_store(config: &StoreConfig) -> Arc<dyn ObjectStore> {
    if config.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(LocalStore::new(config))
    }
}
