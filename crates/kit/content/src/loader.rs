//! Catalog loader with degraded-mode fallback.

use std::path::Path;

use crate::format::RawCatalog;
use crate::index::CatalogIndex;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Loader for the item catalog JSON document.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and index the catalog from a JSON file.
    pub fn load(path: &Path) -> LoadResult<CatalogIndex> {
        let content = read_file(path)?;
        let raw: RawCatalog = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog JSON: {}", e))?;
        Ok(CatalogIndex::from_raw(raw))
    }

    /// Load the catalog, falling back to the empty index on any failure.
    ///
    /// The catalog source is external and possibly unavailable; callers get
    /// a catalog that answers "unknown" for everything rather than an error,
    /// so wearability checks fail closed and rule-data wearables keep
    /// working.
    pub fn load_or_empty(path: &Path) -> CatalogIndex {
        match Self::load(path) {
            Ok(index) => {
                tracing::info!(items = index.len(), path = %path.display(), "item catalog loaded");
                index
            }
            Err(error) => {
                tracing::warn!(%error, "item catalog unavailable, continuing with empty catalog");
                CatalogIndex::empty()
            }
        }
    }
}
