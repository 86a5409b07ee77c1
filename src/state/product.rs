// Product data model
// Records served by the catalog and returned by comparisons

use serde::{Deserialize, Serialize};

/// Unique identifier for a product
pub type ProductId = u64;

/// A single key/value technical specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// Specification label (e.g. "Display")
    pub key: String,
    /// Specification value (e.g. "6.1 inch AMOLED")
    pub value: String,
}

/// Product structure
/// Immutable catalog record, identified by `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for the product
    pub id: ProductId,
    /// Display name of the product
    pub name: String,
    /// Image location (not checked for reachability)
    pub image_url: String,
    /// Free-form description
    pub description: String,
    /// Price, expected to be non-negative
    pub price: f64,
    /// Average rating; no bounds are enforced
    pub rating: f64,
    /// Technical specifications, in display order
    pub specifications: Vec<Specification>,
}
