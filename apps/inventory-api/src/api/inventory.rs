//! Inventory API routes

use axum::Router;
use domain_inventory::handlers;

use crate::state::AppState;

/// Create the inventory router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.service.clone())
}
