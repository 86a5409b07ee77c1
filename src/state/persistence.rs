// Catalog persistence module
// Reads the static product catalog from a JSON file

use super::product::Product;
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for persistence operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// File I/O error
    IoError(String),
    /// JSON deserialization error
    JsonError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::IoError(msg) => write!(f, "IO Error: {}", msg),
            PersistenceError::JsonError(msg) => write!(f, "JSON Error: {}", msg),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Catalog file operations
pub struct CatalogFile;

impl CatalogFile {
    /// Load products from a JSON file
    ///
    /// The file must contain a JSON array of products. Order is preserved.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` if successful
    /// * `Err(PersistenceError)` if the file is missing, unreadable or malformed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, PersistenceError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| PersistenceError::IoError(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&json).map_err(|e| PersistenceError::JsonError(e.to_string()))
    }

    /// Default location of the catalog file, relative to the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from("config").join("data").join("products.json")
    }
}
