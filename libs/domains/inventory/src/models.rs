use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Sentinel category assigned when a product is created without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// How many of the most recently added products the summary reports.
const RECENT_LIMIT: usize = 5;

/// Product entity - one stock line in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, immutable once created
    pub id: u64,
    /// Product name
    pub name: String,
    /// Stock Keeping Unit, uppercased and unique across the catalog
    pub sku: String,
    /// Free-text category; "Uncategorized" when none was given
    pub category: String,
    /// Unit price, held to 2 fractional digits
    pub price: f64,
    /// Current stock count
    pub quantity: i64,
    /// Threshold at or below which the product counts as low stock
    pub reorder_level: i64,
}

impl Product {
    /// A product is low stock once its quantity has fallen to the reorder
    /// threshold (inclusive).
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Stock value of this line (price × quantity).
    pub fn line_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// The persisted document: every product, in insertion order.
///
/// The serialized shape is the on-disk contract — a single `products` array
/// whose entries carry exactly the [`Product`] fields. It must round-trip
/// unchanged across load/save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Next identifier: one past the highest id present (1 when empty).
    ///
    /// Deletion leaves a gap; ids are never reused while the highest
    /// surviving id still anchors the sequence.
    pub fn next_id(&self) -> u64 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Find a product by id.
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a product by id for mutation.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Case-insensitive SKU membership test.
    pub fn contains_sku(&self, sku: &str) -> bool {
        self.products.iter().any(|p| p.sku.eq_ignore_ascii_case(sku))
    }

    /// Remove a product by id; returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() < before
    }

    /// Restartable filtered view over the catalog, in insertion order.
    pub fn search<'a>(&'a self, filter: &'a ProductFilter) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    /// Distinct category values present, sorted ascending.
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Dashboard aggregates over the current snapshot.
    pub fn summarize(&self) -> InventorySummary {
        InventorySummary {
            total_products: self.products.len() as u64,
            total_units: self.products.iter().map(|p| p.quantity).sum(),
            inventory_value: self.products.iter().map(Product::line_value).sum(),
            low_stock: self
                .products
                .iter()
                .filter(|p| p.is_low_stock())
                .cloned()
                .collect(),
            recent: self
                .products
                .iter()
                .rev()
                .take(RECENT_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    /// Product name
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Stock Keeping Unit; uppercased on creation
    #[validate(length(min = 1, max = 50))]
    pub sku: String,
    /// Free-text category; blank falls back to "Uncategorized"
    #[serde(default)]
    pub category: String,
    /// Unit price
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Opening stock count
    #[validate(range(min = 0))]
    pub quantity: i64,
    /// Restocking threshold
    #[validate(range(min = 0))]
    pub reorder_level: i64,
}

/// Stock adjustment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StockAdjustment {
    /// Units to add (positive) or remove (negative)
    pub delta: i64,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Case-insensitive substring match against name or SKU
    pub q: Option<String>,
    /// Case-insensitive substring match against category
    pub category: Option<String>,
    /// Only show products at or below their reorder level
    #[serde(default)]
    pub low_stock: bool,
}

impl ProductFilter {
    /// All present filters must match (logical AND); blank text filters are
    /// skipped.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(q) = trimmed(self.q.as_deref()) {
            let q = q.to_lowercase();
            if !product.name.to_lowercase().contains(&q)
                && !product.sku.to_lowercase().contains(&q)
            {
                return false;
            }
        }

        if let Some(category) = trimmed(self.category.as_deref()) {
            if !product
                .category
                .to_lowercase()
                .contains(&category.to_lowercase())
            {
                return false;
            }
        }

        if self.low_stock && !product.is_low_stock() {
            return false;
        }

        true
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Filtered product listing plus the distinct categories for filter options
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

/// Aggregate dashboard view of the catalog
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventorySummary {
    /// Number of distinct products
    pub total_products: u64,
    /// Total units on hand across all products
    pub total_units: i64,
    /// Sum of price × quantity over the whole catalog
    pub inventory_value: f64,
    /// Products at or below their reorder level, in catalog order
    pub low_stock: Vec<Product>,
    /// The last five products added, most recent first
    pub recent: Vec<Product>,
}

/// Round a price to 2 fractional digits.
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
