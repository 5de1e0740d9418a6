//! Backing-store boundary.
//!
//! Persistence is fully delegated to a hosted document store. Per named
//! collection the store exposes exactly two operations: fetch the whole
//! collection and replace the whole collection. Replace-all is the only
//! write path — last writer wins at the store, there is no per-item upsert
//! and no diffing. Anything satisfying [`CollectionStore`] is substitutable,
//! which is the seam the test suite exploits.

mod memory;
mod remote;

pub use memory::MemoryStore;
pub use remote::RemoteStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;

/// The named collections the site persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Notices,
    News,
    Pages,
    Carousel,
    HomeWidgets,
    InfoCards,
    Menu,
    Sidebar,
    Settings,
}

impl CollectionKind {
    /// Wire name of the collection in the hosted store.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Notices => "notices",
            CollectionKind::News => "news",
            CollectionKind::Pages => "pages",
            CollectionKind::Carousel => "carousel",
            CollectionKind::HomeWidgets => "home-widgets",
            CollectionKind::InfoCards => "info-cards",
            CollectionKind::Menu => "menu",
            CollectionKind::Sidebar => "sidebar",
            CollectionKind::Settings => "settings",
        }
    }
}

/// Injected persistence collaborator.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Fetch every document in a collection.
    async fn fetch_all(&self, kind: CollectionKind) -> Result<Vec<Value>, AppError>;

    /// Atomically replace a collection with the given documents.
    async fn replace_all(&self, kind: CollectionKind, items: Vec<Value>) -> Result<(), AppError>;
}

/// Fetch a collection decoded into its model type.
pub async fn fetch<T: DeserializeOwned>(
    store: &dyn CollectionStore,
    kind: CollectionKind,
) -> Result<Vec<T>, AppError> {
    let raw = store.fetch_all(kind).await?;
    raw.into_iter()
        .map(|doc| serde_json::from_value(doc).map_err(AppError::from))
        .collect()
}

/// Replace a collection from typed records.
pub async fn replace<T: Serialize>(
    store: &dyn CollectionStore,
    kind: CollectionKind,
    items: &[T],
) -> Result<(), AppError> {
    let raw = items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(AppError::from))
        .collect::<Result<Vec<_>, _>>()?;
    store.replace_all(kind, raw).await
}
