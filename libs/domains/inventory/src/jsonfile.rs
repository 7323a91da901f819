//! Flat-file JSON implementation of CatalogStore

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use core_config::store::StoreConfig;
use tracing::instrument;

use crate::error::StorageError;
use crate::models::Catalog;
use crate::repository::CatalogStore;

/// Catalog store backed by a single pretty-printed JSON document.
///
/// Saves rewrite the document in full and are not atomic: a failure
/// mid-write can leave a torn file. That is the accepted durability posture
/// for this system — single user, human-sized data, no concurrent writers
/// outside the owning process.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the document location in `config`.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.data_path.clone(),
        }
    }

    /// Location of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_document(&self, catalog: &Catalog) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_vec_pretty(catalog)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Catalog, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // First access: persist an empty document so subsequent
                // loads (and external readers) see a valid catalog
                let catalog = Catalog::default();
                self.write_document(&catalog).await?;
                tracing::info!("Created empty inventory document");
                return Ok(catalog);
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        let catalog = serde_json::from_slice(&bytes)?;
        Ok(catalog)
    }

    #[instrument(skip_all, fields(path = %self.path.display(), products = catalog.products.len()))]
    async fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        self.write_document(catalog).await?;
        tracing::debug!("Catalog persisted");
        Ok(())
    }
}
