use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;

use crate::{ObjectStore, StoreError};

/// Process-local store, mostly for tests and `--ephemeral` runs.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), StoreError> {
        self.objects
            .write()
            .map_err(|_| StoreError::Internal("memory store lock poisoned".into()))?
            .insert(key.to_string(), data);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, StoreError> {
        self.objects
            .read()
            .map_err(|_| StoreError::Internal("memory store lock poisoned".into()))?
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.objects
            .write()
            .map_err(|_| StoreError::Internal("memory store lock poisoned".into()))?
            .remove(key);
        Ok(())
    }
}
