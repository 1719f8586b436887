//! Static wear rules: lock items, extra wearables, and armor exclusivity.
//!
//! Pure data with case-insensitive membership lookups. The engine never
//! hardcodes item ids; everything it needs to know about special wearables
//! lives here so rule data can change without touching validation logic.

/// Domain rule data consulted by placement validation.
///
/// Ids are normalised to lowercase at construction; lookups accept any
/// casing. An item may belong to any number of conflict groups - the
/// engine checks every group containing a candidate.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    lock_items: Vec<String>,
    extra_wearables: Vec<String>,
    conflict_groups: Vec<Vec<String>>,
}

impl RuleSet {
    /// Builds a rule set from raw id lists, normalising every id to
    /// lowercase.
    pub fn new<S: AsRef<str>>(
        lock_items: impl IntoIterator<Item = S>,
        extra_wearables: impl IntoIterator<Item = S>,
        conflict_groups: impl IntoIterator<Item = Vec<S>>,
    ) -> Self {
        fn lower<S: AsRef<str>>(ids: impl IntoIterator<Item = S>) -> Vec<String> {
            ids.into_iter()
                .map(|id| id.as_ref().to_ascii_lowercase())
                .collect()
        }

        Self {
            lock_items: lower(lock_items),
            extra_wearables: lower(extra_wearables),
            conflict_groups: conflict_groups.into_iter().map(lower).collect(),
        }
    }

    /// Returns true iff the item locks the whole wear bar when worn.
    pub fn is_lock_item(&self, id: &str) -> bool {
        self.lock_items.iter().any(|lock| lock.eq_ignore_ascii_case(id))
    }

    /// Returns true iff the item is wearable despite not being attire.
    pub fn is_extra_wearable(&self, id: &str) -> bool {
        self.extra_wearables
            .iter()
            .any(|extra| extra.eq_ignore_ascii_case(id))
    }

    /// Iterates every conflict group the item belongs to.
    pub fn conflict_groups_of<'a>(
        &'a self,
        id: &'a str,
    ) -> impl Iterator<Item = &'a [String]> + 'a {
        self.conflict_groups
            .iter()
            .filter(move |group| group.iter().any(|member| member.eq_ignore_ascii_case(id)))
            .map(Vec::as_slice)
    }

    /// Returns true iff the two items are mutually exclusive on the wear bar.
    pub fn conflicts(&self, a: &str, b: &str) -> bool {
        self.conflict_groups_of(a)
            .any(|group| group.iter().any(|member| member.eq_ignore_ascii_case(b)))
    }
}

impl Default for RuleSet {
    /// The stock rule data: full suits, event wearables, and the four
    /// armor exclusivity groups (head, torso, feet, legs).
    fn default() -> Self {
        Self::new(
            [
                "hazmatsuit",
                "scarecrow.suit",
                "attire.bunny.onesie",
                "halloween.mummysuit",
                "gingerbreadsuit",
            ],
            [
                "scarecrow.suit",
                "attire.bunny.onesie",
                "attire.bunnyears",
                "halloween.mummysuit",
                "scarecrowhead",
                "gingerbreadsuit",
            ],
            [
                vec![
                    "metal.facemask",
                    "coffeecan.helmet",
                    "deer.skull.mask",
                    "bucket.helmet",
                    "hat.candle",
                    "diving.mask",
                    "heavy.plate.helmet",
                    "riot.helmet",
                    "wood.armor.helmet",
                    "hat.wolf",
                    "scarecrowhead",
                ],
                vec![
                    "heavy.plate.jacket",
                    "metal.plate.torso",
                    "roadsign.jacket",
                    "jacket.snow",
                    "wood.armor.jacket",
                    "jacket",
                ],
                vec![
                    "shoes.boots",
                    "burlap.shoes",
                    "diving.fins",
                    "boots.frog",
                    "attire.hide.boots",
                ],
                vec!["heavy.plate.pants", "roadsign.kilt", "wood.armor.pants"],
            ],
        )
    }
}
