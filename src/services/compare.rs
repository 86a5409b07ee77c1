//! Product comparison service
//!
//! Resolves requested product IDs against the catalog, keeping the caller's
//! order and duplicates. Unresolved IDs are dropped; the request fails only
//! when none of them resolve.

use crate::diagnostics::DiagnosticSink;
use crate::state::{Catalog, Product, ProductId};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by [`CompareService::compare`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// None of the requested IDs matched a catalog entry
    #[error("no products found for the given ids")]
    NotFound {
        /// IDs exactly as requested, in order
        requested_ids: Vec<ProductId>,
    },
}

/// Comparison engine over a shared catalog
#[derive(Clone)]
pub struct CompareService {
    catalog: Arc<Catalog>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl CompareService {
    /// Create a comparison service over `catalog`
    pub fn new(catalog: Arc<Catalog>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            catalog,
            diagnostics,
        }
    }

    /// Resolve `ids` to products for side-by-side comparison
    ///
    /// # Arguments
    /// * `ids` - Requested product IDs; order and duplicates are kept
    ///
    /// # Returns
    /// * `Ok(Vec<&Product>)` - Resolved products in requested order
    /// * `Err(CompareError::NotFound)` - No requested ID resolved (also the
    ///   outcome for an empty `ids` slice)
    pub fn compare(&self, ids: &[ProductId]) -> Result<Vec<&Product>, CompareError> {
        let found: Vec<&Product> = ids
            .iter()
            .filter_map(|id| self.catalog.find_by_id(*id))
            .collect();

        if found.is_empty() {
            return Err(CompareError::NotFound {
                requested_ids: ids.to_vec(),
            });
        }

        if found.len() < ids.len() {
            let missing: Vec<ProductId> = ids
                .iter()
                .copied()
                .filter(|id| self.catalog.find_by_id(*id).is_none())
                .collect();
            self.diagnostics.unresolved_ids(&missing);
        }

        Ok(found)
    }
}
