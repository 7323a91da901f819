//! Handler tests for the Inventory domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They drive ONLY the inventory domain router, backed by a temp-file store,
//! not the full application with docs routes and middleware.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use core_config::store::StoreConfig;
use domain_inventory::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn test_app(dir: &tempfile::TempDir) -> Router {
    let store = JsonFileStore::new(&StoreConfig::new(dir.path().join("inventory.json")));
    let service = InventoryService::new(store);
    handlers::router(service)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn widget_payload() -> Value {
    json!({
        "name": "Widget",
        "sku": "w-1",
        "price": 9.5,
        "quantity": 10,
        "reorder_level": 2
    })
}

#[tokio::test]
async fn test_create_product_returns_201_with_normalized_fields() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let response = app.oneshot(post_json("/", widget_payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.sku, "W-1");
    assert_eq!(product.category, "Uncategorized");
    assert_eq!(product.price, 9.5);
    assert_eq!(product.quantity, 10);
    assert_eq!(product.reorder_level, 2);
}

#[tokio::test]
async fn test_create_product_duplicate_sku_returns_409() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let first = app
        .clone()
        .oneshot(post_json("/", widget_payload()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // same SKU with different casing is still a duplicate
    let mut payload = widget_payload();
    payload["sku"] = json!("W-1");
    payload["name"] = json!("Widget Mk2");
    let second = app.oneshot(post_json("/", payload)).await.unwrap();

    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body: Value = json_body(second.into_body()).await;
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_create_product_negative_quantity_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let mut payload = widget_payload();
    payload["quantity"] = json!(-1);
    let response = app.oneshot(post_json("/", payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_non_numeric_price_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let mut payload = widget_payload();
    payload["price"] = json!("nine fifty");
    let response = app.oneshot(post_json("/", payload)).await.unwrap();

    // typed JSON boundary: axum reports data errors as 422
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_product_blank_name_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let mut payload = widget_payload();
    payload["name"] = json!("   ");
    let response = app.oneshot(post_json("/", payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_filters_by_category_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let mut hammer = widget_payload();
    hammer["name"] = json!("Hammer");
    hammer["sku"] = json!("HAM-1");
    hammer["category"] = json!("Tools");
    app.clone().oneshot(post_json("/", hammer)).await.unwrap();

    let mut bolt = widget_payload();
    bolt["name"] = json!("Bolt");
    bolt["sku"] = json!("BLT-1");
    bolt["category"] = json!("Parts");
    app.clone().oneshot(post_json("/", bolt)).await.unwrap();

    let response = app.oneshot(get("/?category=tools")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listing: Value = json_body(response.into_body()).await;
    let products = listing["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["sku"], "HAM-1");
    // the category options cover the whole catalog
    assert_eq!(listing["categories"], json!(["Parts", "Tools"]));
}

#[tokio::test]
async fn test_summary_reports_totals_and_low_stock() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let mut low = widget_payload();
    low["quantity"] = json!(1);
    app.clone().oneshot(post_json("/", low)).await.unwrap();

    let mut healthy = widget_payload();
    healthy["sku"] = json!("w-2");
    healthy["name"] = json!("Widget XL");
    app.clone().oneshot(post_json("/", healthy)).await.unwrap();

    let response = app.oneshot(get("/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary: Value = json_body(response.into_body()).await;
    assert_eq!(summary["total_products"], 2);
    assert_eq!(summary["total_units"], 11);
    let low_stock = summary["low_stock"].as_array().unwrap();
    assert_eq!(low_stock.len(), 1);
    assert_eq!(low_stock[0]["sku"], "W-1");
}

#[tokio::test]
async fn test_adjust_stock_applies_delta_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    app.clone()
        .oneshot(post_json("/", widget_payload()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/1/stock", json!({"delta": -3})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.quantity, 7);

    // the new quantity survives a fresh read
    let response = app.oneshot(get("/1")).await.unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.quantity, 7);
}

#[tokio::test]
async fn test_adjust_stock_below_zero_returns_400_and_keeps_quantity() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    app.clone()
        .oneshot(post_json("/", widget_payload()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/1/stock", json!({"delta": -15})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/1")).await.unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.quantity, 10);
}

#[tokio::test]
async fn test_adjust_stock_non_integer_delta_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    app.clone()
        .oneshot(post_json("/", widget_payload()))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json("/1/stock", json!({"delta": "five"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_adjust_stock_unknown_id_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(post_json("/42/stock", json!({"delta": 1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_returns_204_then_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    app.clone()
        .oneshot(post_json("/", widget_payload()))
        .await
        .unwrap();

    let delete = Request::builder()
        .method("DELETE")
        .uri("/1")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_absent_product_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let delete = Request::builder()
        .method("DELETE")
        .uri("/42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let response = app.oneshot(get("/not-a-number")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
