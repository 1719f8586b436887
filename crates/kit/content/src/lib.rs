//! Catalog loading and indexing.
//!
//! This crate turns the externally sourced catalog JSON document into the
//! read-only [`CatalogIndex`] consumed by `kit-core` through its
//! `CatalogOracle` trait. Catalog data never appears in loadout state; the
//! engine only queries it during validation.

pub mod format;
pub mod index;
pub mod loader;

pub use format::{RawCatalog, RawItem};
pub use index::{CatalogIndex, PC_SUBCATEGORY};
pub use loader::{CatalogLoader, LoadResult};
