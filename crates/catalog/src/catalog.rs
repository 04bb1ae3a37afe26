use serde::{Deserialize, Serialize};

use shopfront_core::ProductId;

use crate::product::Product;

/// The full set of purchasable products known to the client at a point in
/// time.
///
/// A snapshot, not a live view: the surrounding layer refetches from the
/// backend and rebuilds the catalog when it wants fresher data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap the product list the backend returned.
    ///
    /// Duplicate ids are not expected from the backend and are not guarded
    /// against; lookups take the first match.
    pub fn from_remote(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id. First match wins.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Case-insensitive substring search over name and category.
    ///
    /// A blank query matches everything, which is how the listing view shows
    /// the full catalog through the same code path as search results.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_remote(vec![
            Product::new(pid("A"), "Ball", "Sports", 100.0, 5, "x").unwrap(),
            Product::new(pid("B"), "Racket", "Sports", 250.0, 4, "y").unwrap(),
            Product::new(pid("C"), "Notebook", "Stationery", 20.0, 3, "z").unwrap(),
        ])
    }

    #[test]
    fn find_returns_matching_product() {
        let catalog = sample_catalog();
        let product = catalog.find(&pid("B")).unwrap();
        assert_eq!(product.name, "Racket");
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let catalog = sample_catalog();
        assert!(catalog.find(&pid("Z")).is_none());
    }

    #[test]
    fn find_takes_first_match_on_duplicate_ids() {
        let catalog = Catalog::from_remote(vec![
            Product::new(pid("A"), "First", "Sports", 1.0, 1, "x").unwrap(),
            Product::new(pid("A"), "Second", "Sports", 2.0, 2, "y").unwrap(),
        ]);
        assert_eq!(catalog.find(&pid("A")).unwrap().name, "First");
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let catalog = sample_catalog();
        let hits = catalog.search("ball");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ball");
    }

    #[test]
    fn search_matches_category() {
        let catalog = sample_catalog();
        let hits = catalog.search("SPORTS");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn blank_query_returns_everything() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("").len(), 3);
        assert_eq!(catalog.search("   ").len(), 3);
    }

    #[test]
    fn search_with_no_hits_returns_empty() {
        let catalog = sample_catalog();
        assert!(catalog.search("bicycle").is_empty());
    }

    #[test]
    fn empty_catalog_behaves() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.find(&pid("A")).is_none());
        assert!(catalog.search("ball").is_empty());
    }
}
