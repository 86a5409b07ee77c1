// State management module
// Handles the product model, the catalog store and its persistence

pub mod app_state;
pub mod catalog;
pub mod persistence;
pub mod product;

pub use app_state::AppState;
pub use catalog::Catalog;
pub use persistence::{CatalogFile, PersistenceError};
pub use product::{Product, ProductId, Specification};
