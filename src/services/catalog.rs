use crate::models::CatalogItem;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when reading a catalog snapshot
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog format: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of catalog snapshots
///
/// Each call returns a fresh, owned snapshot. Freshness and caching are up to
/// the implementation; the matcher only ever borrows the snapshot for one run.
pub trait CatalogSupplier: Send + Sync {
    fn snapshot(&self) -> Result<Vec<CatalogItem>, CatalogError>;
}

/// Fixed in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
}

impl StaticCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

impl CatalogSupplier for StaticCatalog {
    fn snapshot(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self.items.clone())
    }
}

/// Catalog stored as a JSON array of services
///
/// The file is re-read on every snapshot so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSupplier for JsonFileCatalog {
    fn snapshot(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded {} services from {}", items.len(), self.path.display());
        Ok(items)
    }
}

/// Supplier used when no catalog is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCatalog;

impl CatalogSupplier for NoCatalog {
    fn snapshot(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        Err(CatalogError::Unavailable(
            "no catalog configured, send one inline with the request".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    const CATALOG_JSON: &str = r#"[
        {
            "id": "svc-1",
            "name": "Garden Pavilion",
            "category": "Venue",
            "basePrice": 120000,
            "rating": 4.7,
            "isVerified": true,
            "location": "Tagaytay",
            "weddingStyles": ["garden", "rustic"]
        },
        {
            "id": "svc-2",
            "name": "Lens & Light",
            "category": "wedding_photography",
            "basePrice": 45000
        }
    ]"#;

    #[test]
    fn test_json_file_catalog() {
        let path = std::env::temp_dir().join(format!("catalog-test-{}.json", std::process::id()));
        fs::write(&path, CATALOG_JSON).unwrap();

        let items = JsonFileCatalog::new(&path).snapshot().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, Category::Venue);
        assert_eq!(items[1].category, Category::Photography);
        assert!(items[1].accepting_bookings);
        assert_eq!(items[1].rating, None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = JsonFileCatalog::new("/definitely/not/here.json").snapshot();
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let path = std::env::temp_dir().join(format!("catalog-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();

        let result = JsonFileCatalog::new(&path).snapshot();
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_no_catalog_is_unavailable() {
        assert!(matches!(NoCatalog.snapshot(), Err(CatalogError::Unavailable(_))));
    }
}
