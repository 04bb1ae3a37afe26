use serde::{Deserialize, Serialize};

use shopfront_core::{ProductId, StoreError, StoreResult};

/// Highest rating the backend issues (star scale 0..=5).
pub const MAX_RATING: u8 = 5;

/// A purchasable product as issued by the backend catalog.
///
/// Immutable from the client's perspective: the client renders products and
/// joins them against cart lines, it never edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit cost. Validated finite and non-negative at construction.
    pub cost: f64,
    /// Star rating, 0..=5.
    pub rating: u8,
    /// Image reference (URL or asset key); opaque to the client.
    pub image: String,
}

impl Product {
    /// Build a validated product record.
    ///
    /// Rejects blank names, non-finite or negative costs, and out-of-range
    /// ratings so that malformed backend data surfaces here instead of as
    /// NaN totals later.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        cost: f64,
        rating: u8,
        image: impl Into<String>,
    ) -> StoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::validation("product name cannot be blank"));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(StoreError::validation(format!(
                "product cost must be a finite non-negative number, got {cost}"
            )));
        }
        if rating > MAX_RATING {
            return Err(StoreError::validation(format!(
                "product rating must be at most {MAX_RATING}, got {rating}"
            )));
        }
        Ok(Self {
            id,
            name,
            category: category.into(),
            cost,
            rating,
            image: image.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn new_accepts_well_formed_product() {
        let product = Product::new(pid("A"), "Ball", "Sports", 100.0, 5, "x").unwrap();
        assert_eq!(product.name, "Ball");
        assert_eq!(product.cost, 100.0);
        assert_eq!(product.rating, 5);
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Product::new(pid("A"), "   ", "Sports", 100.0, 5, "x").unwrap_err();
        match err {
            StoreError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_negative_cost() {
        assert!(Product::new(pid("A"), "Ball", "Sports", -0.01, 5, "x").is_err());
    }

    #[test]
    fn new_rejects_non_finite_cost() {
        assert!(Product::new(pid("A"), "Ball", "Sports", f64::NAN, 5, "x").is_err());
        assert!(Product::new(pid("A"), "Ball", "Sports", f64::INFINITY, 5, "x").is_err());
    }

    #[test]
    fn new_rejects_out_of_range_rating() {
        assert!(Product::new(pid("A"), "Ball", "Sports", 100.0, 6, "x").is_err());
    }

    #[test]
    fn zero_cost_is_allowed() {
        // Free samples exist; zero is a valid unit cost.
        assert!(Product::new(pid("A"), "Flyer", "Promo", 0.0, 0, "x").is_ok());
    }
}
