// Product catalog store
// Read-only, ordered snapshot of the products loaded at startup

use super::persistence::CatalogFile;
use super::product::{Product, ProductId};
use crate::diagnostics::DiagnosticSink;
use std::path::Path;

/// In-memory product catalog
/// Populated once and never mutated afterwards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products already in memory, keeping their order
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load the catalog from a JSON file
    ///
    /// A missing or malformed file is reported to `diagnostics` and yields an
    /// empty catalog, so the service stays up and answers every comparison
    /// with "not found".
    pub fn load<P: AsRef<Path>>(path: P, diagnostics: &dyn DiagnosticSink) -> Self {
        let path = path.as_ref();
        match CatalogFile::load_from_file(path) {
            Ok(products) => {
                diagnostics.catalog_loaded(path, products.len());
                Self::from_products(products)
            }
            Err(e) => {
                diagnostics.catalog_unavailable(path, &e);
                Self::default()
            }
        }
    }

    /// Find a product by ID
    /// Linear scan; the first product with a matching ID wins
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Number of products in the catalog
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// All products, in load order
    pub fn all(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingDiagnostics;
    use crate::state::Specification;
    use std::io::Write;
    use tempfile::NamedTempFile;

    pub(crate) fn product(id: ProductId, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            image_url: format!("https://example.com/images/{}.jpg", id),
            description: format!("{} description", name),
            price: 100.0 * id as f64,
            rating: 4.0,
            specifications: vec![Specification {
                key: "Weight".to_string(),
                value: format!("{}g", id * 10),
            }],
        }
    }

    pub(crate) fn catalog_of(ids: &[ProductId]) -> Catalog {
        Catalog::from_products(
            ids.iter()
                .map(|id| product(*id, &format!("Product {}", id)))
                .collect(),
        )
    }

    #[test]
    fn test_find_by_id_present() {
        let catalog = catalog_of(&[1, 2, 3, 4, 5]);
        for id in 1..=5 {
            let found = catalog.find_by_id(id).expect("product should exist");
            assert_eq!(found.id, id);
        }
    }

    #[test]
    fn test_find_by_id_absent() {
        let catalog = catalog_of(&[1, 2, 3]);
        assert!(catalog.find_by_id(0).is_none());
        assert!(catalog.find_by_id(999).is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let catalog = Catalog::from_products(vec![
            product(1, "First"),
            product(2, "Other"),
            product(1, "Second"),
        ]);
        assert_eq!(catalog.find_by_id(1).unwrap().name, "First");
    }

    #[test]
    fn test_count_matches_all() {
        let catalog = catalog_of(&[5, 3, 9]);
        assert_eq!(catalog.count(), 3);
        assert_eq!(catalog.count(), catalog.all().len());
        let ids: Vec<ProductId> = catalog.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn test_load_reports_success() {
        let mut file = NamedTempFile::new().unwrap();
        let products = vec![product(1, "One"), product(2, "Two")];
        file.write_all(serde_json::to_string(&products).unwrap().as_bytes())
            .unwrap();

        let diagnostics = RecordingDiagnostics::default();
        let catalog = Catalog::load(file.path(), &diagnostics);

        assert_eq!(catalog.all(), products.as_slice());
        assert_eq!(*diagnostics.loaded.lock().unwrap(), vec![2]);
        assert!(diagnostics.unavailable.lock().unwrap().is_empty());
    }

    #[test]
    fn test_load_degrades_to_empty_on_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": \"one\"}]").unwrap();

        let diagnostics = RecordingDiagnostics::default();
        let catalog = Catalog::load(file.path(), &diagnostics);

        assert_eq!(catalog.count(), 0);
        assert_eq!(diagnostics.unavailable.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_load_degrades_to_empty_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let diagnostics = RecordingDiagnostics::default();
        let catalog = Catalog::load(dir.path().join("missing.json"), &diagnostics);

        assert!(catalog.all().is_empty());
        let unavailable = diagnostics.unavailable.lock().unwrap();
        assert_eq!(unavailable.len(), 1);
        assert!(unavailable[0].starts_with("IO Error"));
    }
}
