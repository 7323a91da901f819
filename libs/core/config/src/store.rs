use crate::{env_or_default, ConfigError, FromEnv};
use std::path::PathBuf;

/// Location of the flat-file inventory store.
///
/// The store is a single JSON document; the only knob is where it lives.
/// Passed explicitly into the store constructor — there is no process-wide
/// default path.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub data_path: PathBuf,
}

impl StoreConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }
}

impl FromEnv for StoreConfig {
    /// Reads from environment variables with sensible defaults:
    /// - INVENTORY_DATA_PATH: defaults to "data/inventory.json"
    fn from_env() -> Result<Self, ConfigError> {
        let data_path = env_or_default("INVENTORY_DATA_PATH", "data/inventory.json");
        Ok(Self {
            data_path: PathBuf::from(data_path),
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/inventory.json"),
        }
    }
}
