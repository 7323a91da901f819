//! Inventory Domain
//!
//! This module provides a complete domain implementation for tracking
//! products in a flat-file catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, write serialization
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Catalog persistence (trait + JSON file implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Catalog document, entities, DTOs, pure queries
//! └─────────────┘
//! ```
//!
//! The catalog is one persisted document. Every operation loads it in full,
//! works on the in-memory snapshot, and mutations rewrite the document in
//! full — the right shape for a single-user tool with human-sized data.
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::store::StoreConfig;
//! use domain_inventory::{handlers, JsonFileStore, InventoryService};
//!
//! let store = JsonFileStore::new(&StoreConfig::new("data/inventory.json"));
//! let service = InventoryService::new(store);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod jsonfile;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{InventoryError, InventoryResult, StorageError};
pub use handlers::ApiDoc;
pub use jsonfile::JsonFileStore;
pub use models::{
    Catalog, CreateProduct, InventorySummary, Product, ProductFilter, ProductListing,
    StockAdjustment, UNCATEGORIZED,
};
pub use repository::CatalogStore;
pub use service::InventoryService;
