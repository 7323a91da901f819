use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Failures from the flat-file catalog store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Inventory document could not be accessed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inventory document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("Product with SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Quantity cannot go below 0: {current} on hand, adjustment {delta}")]
    StockUnderflow { current: i64, delta: i64 },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Convert InventoryError to AppError for standardized error responses
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            InventoryError::DuplicateSku(sku) => {
                AppError::Conflict(format!("Product with SKU '{}' already exists", sku))
            }
            InventoryError::Validation(msg) => AppError::BadRequest(msg),
            InventoryError::StockUnderflow { current, delta } => AppError::BadRequest(format!(
                "Quantity cannot go below 0: {} on hand, adjustment {}",
                current, delta
            )),
            InventoryError::Storage(err) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
