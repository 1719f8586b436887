//! Case-insensitive lookup index over the loaded catalog.

use std::collections::{HashMap, HashSet};

use kit_core::{ATTIRE_CATEGORY, CatalogOracle, HORSE_SUBCATEGORY, ItemDefinition};

use crate::format::RawCatalog;

/// Subcategory hidden from browsing (admin/console items). Its items stay
/// placeable when referenced directly.
pub const PC_SUBCATEGORY: &str = "PC";

/// Immutable item index built once from the catalog document.
///
/// Implements [`CatalogOracle`] for the engine and adds the browse/search
/// queries the presentation layer needs. An empty index (the degraded mode
/// for a missing catalog) answers every lookup with "unknown".
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    /// All items in category, then subcategory, order.
    items: Vec<ItemDefinition>,
    /// Lowercased id -> position in `items`. First occurrence wins when the
    /// document repeats an id.
    by_id: HashMap<String, usize>,
    /// Lowercased ids of wearable attire (ATTIRE minus Horse).
    attire: HashSet<String>,
}

impl CatalogIndex {
    /// The inert index used when no catalog could be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the index from a parsed catalog document.
    pub fn from_raw(raw: RawCatalog) -> Self {
        let mut index = Self::default();
        for (category, subcategories) in raw {
            for (subcategory, entries) in subcategories {
                for entry in entries {
                    let key = entry.id.to_ascii_lowercase();
                    if category == ATTIRE_CATEGORY && subcategory != HORSE_SUBCATEGORY {
                        index.attire.insert(key.clone());
                    }
                    let definition = ItemDefinition::new(
                        entry.id,
                        entry.name,
                        entry.image,
                        category.clone(),
                        subcategory.clone(),
                    );
                    index.by_id.entry(key).or_insert(index.items.len());
                    index.items.push(definition);
                }
            }
        }
        index
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct category names, in index order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.category.as_str()))
            .map(|item| item.category.as_str())
            .collect()
    }

    /// Iterates browsable items, hiding the `PC` subcategory.
    pub fn browse(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items
            .iter()
            .filter(|item| item.subcategory != PC_SUBCATEGORY)
    }

    /// Browsable items whose id or name contains `term`, case-insensitive,
    /// optionally restricted to one category.
    pub fn search(&self, term: &str, category: Option<&str>) -> Vec<&ItemDefinition> {
        let term = term.to_ascii_lowercase();
        self.browse()
            .filter(|item| category.is_none_or(|cat| item.category.eq_ignore_ascii_case(cat)))
            .filter(|item| {
                item.id.to_ascii_lowercase().contains(&term)
                    || item.name.to_ascii_lowercase().contains(&term)
            })
            .collect()
    }
}

impl CatalogOracle for CatalogIndex {
    fn find_item(&self, id: &str) -> Option<&ItemDefinition> {
        let key = id.to_ascii_lowercase();
        self.by_id.get(&key).map(|&pos| &self.items[pos])
    }

    fn is_attire(&self, id: &str) -> bool {
        self.attire.contains(&id.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::RawItem;
    use std::collections::BTreeMap;

    fn raw_item(id: &str, image: Option<&str>) -> RawItem {
        RawItem {
            id: id.to_owned(),
            name: id.to_owned(),
            image: image.map(str::to_owned),
        }
    }

    fn sample() -> RawCatalog {
        let mut attire = BTreeMap::new();
        attire.insert("Helmets".to_owned(), vec![raw_item("riot.helmet", Some("./images/riot"))]);
        attire.insert("Horse".to_owned(), vec![raw_item("horse.shoes", None)]);

        let mut misc = BTreeMap::new();
        misc.insert("PC".to_owned(), vec![raw_item("admin.flare", None)]);
        misc.insert("Tools".to_owned(), vec![raw_item("hammer", None)]);

        let mut raw = BTreeMap::new();
        raw.insert(ATTIRE_CATEGORY.to_owned(), attire);
        raw.insert("MISC".to_owned(), misc);
        raw
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = CatalogIndex::from_raw(sample());
        assert_eq!(index.find_item("RIOT.Helmet").unwrap().id, "riot.helmet");
        assert!(index.find_item("nope").is_none());
    }

    #[test]
    fn horse_attire_is_not_wearable() {
        let index = CatalogIndex::from_raw(sample());
        assert!(index.is_attire("riot.helmet"));
        assert!(!index.is_attire("horse.shoes"));
        assert!(!index.is_attire("hammer"));
    }

    #[test]
    fn pc_items_hidden_from_browse_but_resolvable() {
        let index = CatalogIndex::from_raw(sample());
        assert!(index.browse().all(|item| item.id != "admin.flare"));
        assert!(index.search("flare", None).is_empty());
        assert!(index.find_item("admin.flare").is_some());
    }

    #[test]
    fn search_filters_by_category() {
        let index = CatalogIndex::from_raw(sample());
        assert_eq!(index.search("h", Some("MISC")).len(), 1);
        assert_eq!(index.search("", None).len(), 3);
    }

    #[test]
    fn image_path_comes_from_the_catalog() {
        let index = CatalogIndex::from_raw(sample());
        assert_eq!(index.image_path("riot.helmet"), Some("./images/riot"));
        assert_eq!(index.image_path("hammer"), None);
    }
}
