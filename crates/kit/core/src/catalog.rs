//! Read-only item catalog access.
//!
//! The catalog is sourced from an external service and may be missing or
//! malformed; the engine therefore talks to it through the [`CatalogOracle`]
//! trait and treats "item unknown" as a normal answer, never an error.
//! [`EmptyCatalog`] is the degraded-mode implementation used when no catalog
//! could be loaded: every query fails closed.

/// A single placeable item as described by the catalog.
///
/// Item ids are matched case-insensitively everywhere; the definition keeps
/// the catalog's original spelling for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    /// Relative image path as given by the catalog, if any.
    pub image: Option<String>,
    pub category: String,
    pub subcategory: String,
}

impl ItemDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: Option<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image,
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }
}

/// Name of the catalog category holding wearable items.
pub const ATTIRE_CATEGORY: &str = "ATTIRE";

/// Subcategory of `ATTIRE` whose items can never be worn by players.
pub const HORSE_SUBCATEGORY: &str = "Horse";

/// Read-only lookup over the loaded item catalog.
///
/// All queries are case-insensitive on item ids and side-effect free.
pub trait CatalogOracle: Send + Sync {
    /// Looks up an item by id (case-insensitive exact match).
    fn find_item(&self, id: &str) -> Option<&ItemDefinition>;

    /// Returns true iff the item appears under `ATTIRE` in any subcategory
    /// except `Horse`.
    fn is_attire(&self, id: &str) -> bool;

    /// Returns the catalog image path for the item, if it has one.
    fn image_path(&self, id: &str) -> Option<&str> {
        self.find_item(id).and_then(|item| item.image.as_deref())
    }
}

/// Inert catalog used when the external source is unavailable.
///
/// Reports every item as unknown and nothing as attire, so wearability
/// checks fail closed while rule-data wearables keep working.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyCatalog;

impl CatalogOracle for EmptyCatalog {
    fn find_item(&self, _id: &str) -> Option<&ItemDefinition> {
        None
    }

    fn is_attire(&self, _id: &str) -> bool {
        false
    }
}
