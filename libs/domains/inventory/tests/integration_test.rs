//! Integration tests for the Inventory domain
//!
//! These tests run the service against a real JSON file store to ensure:
//! - The persisted document round-trips exactly
//! - State survives across store/service instances (every operation reloads
//!   from disk)
//! - The id sequence and SKU uniqueness hold across whole flows

use core_config::store::StoreConfig;
use domain_inventory::*;
use std::path::PathBuf;

fn store_at(path: &PathBuf) -> JsonFileStore {
    JsonFileStore::new(&StoreConfig::new(path.clone()))
}

fn widget(name: &str, sku: &str, category: &str, quantity: i64) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        price: 9.5,
        quantity,
        reorder_level: 2,
    }
}

#[tokio::test]
async fn test_state_survives_across_service_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    {
        let service = InventoryService::new(store_at(&path));
        service
            .create_product(widget("Hammer", "HAM-1", "Tools", 10))
            .await
            .unwrap();
    }

    // a brand-new service over the same file sees the product
    let service = InventoryService::new(store_at(&path));
    let product = service.get_product(1).await.unwrap();
    assert_eq!(product.name, "Hammer");
    assert_eq!(product.sku, "HAM-1");
}

#[tokio::test]
async fn test_load_save_round_trip_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let service = InventoryService::new(store_at(&path));
    service
        .create_product(widget("Hammer", "HAM-1", "Tools", 10))
        .await
        .unwrap();
    service
        .create_product(widget("Bolt", "BLT-1", "Parts", 100))
        .await
        .unwrap();

    let before = std::fs::read(&path).unwrap();

    let store = store_at(&path);
    let catalog = store.load().await.unwrap();
    store.save(&catalog).await.unwrap();

    let after = std::fs::read(&path).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_persisted_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let service = InventoryService::new(store_at(&path));
    service
        .create_product(widget("Hammer", "HAM-1", "Tools", 10))
        .await
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    let products = value["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);

    let entry = &products[0];
    assert_eq!(entry["id"], 1);
    assert_eq!(entry["name"], "Hammer");
    assert_eq!(entry["sku"], "HAM-1");
    assert_eq!(entry["category"], "Tools");
    assert_eq!(entry["price"], 9.5);
    assert_eq!(entry["quantity"], 10);
    assert_eq!(entry["reorder_level"], 2);
}

#[tokio::test]
async fn test_ids_increase_across_successive_adds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let service = InventoryService::new(store_at(&path));
    let mut last_id = 0;
    for i in 1..=5 {
        let product = service
            .create_product(widget(
                &format!("Product {}", i),
                &format!("SKU-{}", i),
                "Misc",
                5,
            ))
            .await
            .unwrap();
        assert!(product.id > last_id);
        last_id = product.id;
    }
}

#[tokio::test]
async fn test_sku_uniqueness_holds_across_the_whole_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let service = InventoryService::new(store_at(&path));
    service
        .create_product(widget("Hammer", "ham-1", "Tools", 10))
        .await
        .unwrap();

    // rejected duplicate leaves the catalog unchanged on disk
    let before = std::fs::read(&path).unwrap();
    let err = service
        .create_product(widget("Sledge", "HAM-1", "Tools", 3))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::DuplicateSku(_)));
    assert_eq!(std::fs::read(&path).unwrap(), before);

    // deleting the holder frees the SKU
    service.delete_product(1).await.unwrap();
    service
        .create_product(widget("Sledge", "HAM-1", "Tools", 3))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_full_crud_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let service = InventoryService::new(store_at(&path));

    // add
    let hammer = service
        .create_product(widget("Hammer", "HAM-1", "Tools", 10))
        .await
        .unwrap();
    let bolt = service
        .create_product(widget("Bolt", "BLT-1", "Parts", 1))
        .await
        .unwrap();

    // search
    let listing = service
        .list_products(ProductFilter {
            q: Some("bolt".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(listing.products.len(), 1);
    assert_eq!(listing.products[0].id, bolt.id);

    // adjust
    let restocked = service
        .adjust_quantity(bolt.id, StockAdjustment { delta: 50 })
        .await
        .unwrap();
    assert_eq!(restocked.quantity, 51);

    // summarize
    let summary = service.summary().await.unwrap();
    assert_eq!(summary.total_products, 2);
    assert_eq!(summary.total_units, 61);
    assert!(summary.low_stock.is_empty());
    assert_eq!(summary.recent.first().unwrap().id, bolt.id);

    // delete
    service.delete_product(hammer.id).await.unwrap();
    let summary = service.summary().await.unwrap();
    assert_eq!(summary.total_products, 1);

    // deleting again reports NotFound and changes nothing
    let before = std::fs::read(&path).unwrap();
    let err = service.delete_product(hammer.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::NotFound(_)));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}
