// Application state
// Shared, read-only handles to the catalog and comparison engine

use super::catalog::Catalog;
use crate::diagnostics::{DiagnosticSink, TracingDiagnostics};
use crate::services::CompareService;
use std::sync::Arc;

/// Main application state
/// Built once at startup and shared between requests without locking
#[derive(Clone)]
pub struct AppState {
    /// Loaded product catalog
    pub catalog: Arc<Catalog>,
    /// Comparison engine over the same catalog
    pub comparator: CompareService,
}

impl AppState {
    /// Create application state around a catalog, logging through `tracing`
    pub fn new(catalog: Catalog) -> Self {
        Self::with_diagnostics(catalog, Arc::new(TracingDiagnostics))
    }

    /// Create application state with a custom diagnostic sink
    pub fn with_diagnostics(catalog: Catalog, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            comparator: CompareService::new(catalog.clone(), diagnostics),
            catalog,
        }
    }
}
