//! Diagnostic sink
//!
//! Non-fatal observations made by the catalog store and comparison engine.
//! Callers inject an implementation; the default one forwards to `tracing`.

use crate::state::{PersistenceError, ProductId};
use std::path::Path;

/// Receives diagnostics emitted by the core
pub trait DiagnosticSink: Send + Sync {
    /// The catalog was read successfully
    fn catalog_loaded(&self, path: &Path, count: usize);

    /// The catalog could not be read or parsed; the service runs with no products
    fn catalog_unavailable(&self, path: &Path, error: &PersistenceError);

    /// A comparison resolved only some of the requested ids
    fn unresolved_ids(&self, missing: &[ProductId]);
}

/// Sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn catalog_loaded(&self, path: &Path, count: usize) {
        tracing::info!(path = %path.display(), count, "Loaded {} products", count);
    }

    fn catalog_unavailable(&self, path: &Path, error: &PersistenceError) {
        tracing::error!(
            path = %path.display(),
            error = %error,
            "Failed to load product catalog, serving an empty catalog"
        );
    }

    fn unresolved_ids(&self, missing: &[ProductId]) {
        tracing::warn!(missing = ?missing, "Some requested product ids were not found");
    }
}
