//! Application state management

use domain_inventory::{InventoryService, JsonFileStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub service: InventoryService<JsonFileStore>,
}
