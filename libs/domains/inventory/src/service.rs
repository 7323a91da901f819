//! Inventory Service - Business logic layer

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{
    round_price, Catalog, CreateProduct, InventorySummary, Product, ProductFilter, ProductListing,
    StockAdjustment, UNCATEGORIZED,
};
use crate::repository::CatalogStore;

/// Inventory service providing business logic operations
///
/// Every operation reloads the catalog from the store, applies its change
/// and persists the result. Mutations serialize behind one lock: the store
/// has no transaction discipline of its own, so overlapping
/// load-mutate-save windows would silently lose updates.
pub struct InventoryService<S: CatalogStore> {
    store: Arc<S>,
    write_guard: Arc<Mutex<()>>,
}

impl<S: CatalogStore> InventoryService<S> {
    /// Create a new InventoryService with the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            write_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Dashboard aggregates over a fresh catalog snapshot
    #[instrument(skip(self))]
    pub async fn summary(&self) -> InventoryResult<InventorySummary> {
        let catalog = self.store.load().await?;
        Ok(catalog.summarize())
    }

    /// Filtered listing plus the distinct categories for filter options
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> InventoryResult<ProductListing> {
        let catalog = self.store.load().await?;
        let products = catalog.search(&filter).cloned().collect();
        Ok(ProductListing {
            products,
            categories: catalog.categories(),
        })
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> InventoryResult<Product> {
        let catalog = self.store.load().await?;
        catalog.get(id).cloned().ok_or(InventoryError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(sku = %input.sku))]
    pub async fn create_product(&self, input: CreateProduct) -> InventoryResult<Product> {
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        let name = input.name.trim().to_string();
        let sku = input.sku.trim().to_uppercase();
        if name.is_empty() || sku.is_empty() {
            return Err(InventoryError::Validation(
                "Name and SKU are required".to_string(),
            ));
        }

        let _guard = self.write_guard.lock().await;
        let mut catalog = self.store.load().await?;

        if catalog.contains_sku(&sku) {
            return Err(InventoryError::DuplicateSku(sku));
        }

        let category = input.category.trim();
        let product = Product {
            id: catalog.next_id(),
            name,
            sku,
            category: if category.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                category.to_string()
            },
            price: round_price(input.price),
            quantity: input.quantity,
            reorder_level: input.reorder_level,
        };

        catalog.products.push(product.clone());
        self.store.save(&catalog).await?;

        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    /// Adjust a product's stock by a positive or negative delta
    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        id: u64,
        adjustment: StockAdjustment,
    ) -> InventoryResult<Product> {
        let _guard = self.write_guard.lock().await;
        let mut catalog = self.store.load().await?;
        let product = catalog.get_mut(id).ok_or(InventoryError::NotFound(id))?;

        let new_quantity = product.quantity + adjustment.delta;
        if new_quantity < 0 {
            return Err(InventoryError::StockUnderflow {
                current: product.quantity,
                delta: adjustment.delta,
            });
        }
        product.quantity = new_quantity;
        let updated = product.clone();

        self.store.save(&catalog).await?;

        tracing::info!(product_id = id, delta = adjustment.delta, "Stock adjusted");
        Ok(updated)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> InventoryResult<()> {
        let _guard = self.write_guard.lock().await;
        let mut catalog = self.store.load().await?;

        if !catalog.remove(id) {
            return Err(InventoryError::NotFound(id));
        }

        self.store.save(&catalog).await?;

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Distinct category values present in the catalog
    #[instrument(skip(self))]
    pub async fn categories(&self) -> InventoryResult<Vec<String>> {
        let catalog = self.store.load().await?;
        Ok(catalog.categories())
    }
}

impl<S: CatalogStore> Clone for InventoryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            write_guard: Arc::clone(&self.write_guard),
        }
    }
}
