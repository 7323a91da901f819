//! HTTP handlers for the Inventory API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    IdPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{
    CreateProduct, InventorySummary, Product, ProductFilter, ProductListing, StockAdjustment,
};
use crate::repository::CatalogStore;
use crate::service::InventoryService;

/// OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_summary,
        get_product,
        adjust_stock,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, StockAdjustment, ProductFilter,
            ProductListing, InventorySummary
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Inventory", description = "Inventory management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the inventory router with all HTTP endpoints
pub fn router<S: CatalogStore + 'static>(service: InventoryService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/summary", get(get_summary))
        .route("/{id}", get(get_product).delete(delete_product))
        .route("/{id}/stock", post(adjust_stock))
        .with_state(shared_service)
}

/// List products with optional filters plus the distinct categories
#[utoipa::path(
    get,
    path = "",
    tag = "Inventory",
    params(ProductFilter),
    responses(
        (status = 200, description = "Filtered products and category options", body = ProductListing),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: CatalogStore>(
    State(service): State<Arc<InventoryService<S>>>,
    Query(filter): Query<ProductFilter>,
) -> InventoryResult<Json<ProductListing>> {
    let listing = service.list_products(filter).await?;
    Ok(Json(listing))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Inventory",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: CatalogStore>(
    State(service): State<Arc<InventoryService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> InventoryResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Aggregate dashboard view of the catalog
#[utoipa::path(
    get,
    path = "/summary",
    tag = "Inventory",
    responses(
        (status = 200, description = "Catalog totals, low stock and recent products", body = InventorySummary),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_summary<S: CatalogStore>(
    State(service): State<Arc<InventoryService<S>>>,
) -> InventoryResult<Json<InventorySummary>> {
    let summary = service.summary().await?;
    Ok(Json(summary))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: CatalogStore>(
    State(service): State<Arc<InventoryService<S>>>,
    IdPath(id): IdPath,
) -> InventoryResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Adjust product stock by a positive or negative delta
#[utoipa::path(
    post,
    path = "/{id}/stock",
    tag = "Inventory",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    request_body = StockAdjustment,
    responses(
        (status = 200, description = "Stock adjusted successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn adjust_stock<S: CatalogStore>(
    State(service): State<Arc<InventoryService<S>>>,
    IdPath(id): IdPath,
    ValidatedJson(adjustment): ValidatedJson<StockAdjustment>,
) -> InventoryResult<Json<Product>> {
    let product = service.adjust_quantity(id, adjustment).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<S: CatalogStore>(
    State(service): State<Arc<InventoryService<S>>>,
    IdPath(id): IdPath,
) -> InventoryResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
