use serde::{Deserialize, Serialize};

use shopfront_catalog::{Catalog, Product};
use shopfront_core::{ProductId, StoreError, StoreResult};

/// The backend's minimal record of a cart entry: what and how many.
///
/// Created/updated/deleted by the backend in response to add/update/remove
/// actions; the client only ever receives these and joins them against the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartLine {
    /// Build a cart line, rejecting a zero quantity.
    pub fn new(product_id: ProductId, quantity: u32) -> StoreResult<Self> {
        if quantity == 0 {
            return Err(StoreError::validation("cart line quantity must be positive"));
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

/// A cart line enriched with its product's descriptive fields.
///
/// Purely a view for rendering and totals: recomputed on every
/// reconciliation, never persisted, never a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub rating: u8,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Explicit field-by-field merge of a line with its matched product.
    ///
    /// Every destination field names its source here, so this is the single
    /// place that defines the CartItem schema.
    pub fn merge(line: &CartLine, product: &Product) -> Self {
        Self {
            product_id: line.product_id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            cost: product.cost,
            rating: product.rating,
            image: product.image.clone(),
            quantity: line.quantity,
        }
    }

    /// Line subtotal: unit cost times quantity.
    pub fn subtotal(&self) -> f64 {
        self.cost * f64::from(self.quantity)
    }
}

/// Join cart lines against the catalog, producing display-ready items.
///
/// The output has the same length and order as `lines`. A line whose
/// `product_id` has no catalog match fails the whole call with
/// [`StoreError::DanglingReference`]; partial results are never returned.
pub fn reconcile(lines: &[CartLine], catalog: &Catalog) -> StoreResult<Vec<CartItem>> {
    lines
        .iter()
        .map(|line| {
            let product = catalog.find(&line.product_id).ok_or_else(|| {
                tracing::warn!(product_id = %line.product_id, "cart line references unknown product");
                StoreError::dangling(line.product_id.clone())
            })?;
            Ok(CartItem::merge(line, product))
        })
        .collect()
}

/// Total cart value: sum of unit cost times quantity. 0.0 for an empty cart.
pub fn total_value(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::subtotal).sum()
}

/// Total number of units across all items. 0 for an empty cart.
pub fn total_item_count(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Whether `product_id` already appears in the item list.
///
/// Used to stop a second "add to cart" of the same product from creating a
/// confusing duplicate entry.
pub fn is_present(items: &[CartItem], product_id: &ProductId) -> bool {
    items.iter().any(|item| &item.product_id == product_id)
}
