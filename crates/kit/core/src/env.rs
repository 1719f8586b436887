//! Read-only collaborators the engine validates against.

use crate::catalog::CatalogOracle;
use crate::rules::RuleSet;

/// Aggregates the read-only facts placement validation needs: the item
/// catalog and the static rule set. The engine never holds these itself,
/// so tests can swap in stub catalogs freely.
#[derive(Clone, Copy)]
pub struct KitEnv<'a> {
    catalog: &'a dyn CatalogOracle,
    rules: &'a RuleSet,
}

impl<'a> KitEnv<'a> {
    pub fn new(catalog: &'a dyn CatalogOracle, rules: &'a RuleSet) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &'a dyn CatalogOracle {
        self.catalog
    }

    pub fn rules(&self) -> &'a RuleSet {
        self.rules
    }
}
