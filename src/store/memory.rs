//! In-memory collection store for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{CollectionKind, CollectionStore};
use crate::errors::AppError;

/// A [`CollectionStore`] backed by a process-local map.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<&'static str, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a collection, bypassing the replace-all path.
    pub async fn preload(&self, kind: CollectionKind, items: Vec<Value>) {
        self.collections.write().await.insert(kind.as_str(), items);
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn fetch_all(&self, kind: CollectionKind) -> Result<Vec<Value>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections.get(kind.as_str()).cloned().unwrap_or_default())
    }

    async fn replace_all(&self, kind: CollectionKind, items: Vec<Value>) -> Result<(), AppError> {
        self.collections.write().await.insert(kind.as_str(), items);
        Ok(())
    }
}
