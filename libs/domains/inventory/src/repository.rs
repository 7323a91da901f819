use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Catalog;

/// Store trait for catalog persistence
///
/// The whole catalog is one document: implementations read it in full and
/// rewrite it in full. Every service operation works against a fresh
/// snapshot, so there are no partial reads or incremental writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load the full catalog, bootstrapping an empty persisted document if
    /// none exists yet.
    async fn load(&self) -> Result<Catalog, StorageError>;

    /// Persist the full catalog, overwriting the previous document.
    async fn save(&self, catalog: &Catalog) -> Result<(), StorageError>;
}
