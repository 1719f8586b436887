//! Wire format of the external catalog document.
//!
//! The source is a JSON object keyed by category, then subcategory, with an
//! array of items per subcategory:
//! `{ "ATTIRE": { "Helmets": [ { "id": "...", "name": "...", "image": "..." } ] } }`

use std::collections::BTreeMap;

use serde::Deserialize;

/// One item entry as the external service describes it.
#[derive(Clone, Debug, Deserialize)]
pub struct RawItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The full catalog document: category -> subcategory -> items.
pub type RawCatalog = BTreeMap<String, BTreeMap<String, Vec<RawItem>>>;
