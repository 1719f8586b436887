//! Item placement, the one action with real validation.

use crate::action::KitTransition;
use crate::env::KitEnv;
use crate::error::{ErrorSeverity, KitError};
use crate::state::{LoadoutState, Occupancy, SlotKind, SlotRef};

/// Rejection reasons for a placement request.
///
/// Every variant is returned to the caller without mutating state; the
/// presentation layer maps them to user feedback.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("slot {0} does not exist")]
    SlotOutOfRange(SlotRef),

    #[error("source slot {0} is empty")]
    EmptySource(SlotRef),

    #[error("backpacks cannot go in the wear bar")]
    BackpackNotWearable,

    #[error("wear bar is locked by a full suit")]
    WearBarLocked,

    #[error("\"{name}\" cannot be placed in wear slots")]
    NotWearable { id: String, name: String },

    #[error("cannot wear {candidate} with {worn}")]
    ConflictingArmor { candidate: String, worn: String },

    #[error("wear lock flag out of sync after placing into {0}")]
    WearLockDesync(SlotRef),
}

impl KitError for PlaceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PlaceError::WearLockDesync(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PlaceError::SlotOutOfRange(_) => "slot_out_of_range",
            PlaceError::EmptySource(_) => "empty_source",
            PlaceError::BackpackNotWearable => "backpack_not_wearable",
            PlaceError::WearBarLocked => "wear_bar_locked",
            PlaceError::NotWearable { .. } => "not_wearable",
            PlaceError::ConflictingArmor { .. } => "conflicting_armor",
            PlaceError::WearLockDesync(_) => "wear_lock_desync",
        }
    }
}

/// Where the candidate item comes from: the catalog palette (drag or
/// click-to-place) or another occupied slot (slot-to-slot drag).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementSource {
    Palette { item_id: String, item_name: String },
    Slot(SlotRef),
}

/// Places an item into a destination slot.
///
/// A successful placement replaces the destination's prior occupancy
/// outright; there is no quantity merging. For slot-to-slot moves the
/// source is cleared as part of the same committed operation, and
/// validation treats the source as already vacated so a worn item can be
/// moved between wear slots without conflicting with itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceAction {
    pub dest: SlotRef,
    pub source: PlacementSource,
}

impl PlaceAction {
    /// Placement of a catalog item.
    pub fn from_palette(
        dest: SlotRef,
        item_id: impl Into<String>,
        item_name: impl Into<String>,
    ) -> Self {
        Self {
            dest,
            source: PlacementSource::Palette {
                item_id: item_id.into(),
                item_name: item_name.into(),
            },
        }
    }

    /// Move of an already-placed item from another slot.
    pub fn from_slot(dest: SlotRef, source: SlotRef) -> Self {
        Self {
            dest,
            source: PlacementSource::Slot(source),
        }
    }

    fn source_slot(&self) -> Option<SlotRef> {
        match self.source {
            PlacementSource::Slot(slot) => Some(slot),
            PlacementSource::Palette { .. } => None,
        }
    }

    /// Resolves the candidate item id and display name.
    fn candidate<'s>(&'s self, state: &'s LoadoutState) -> Result<(&'s str, &'s str), PlaceError> {
        match &self.source {
            PlacementSource::Palette { item_id, item_name } => Ok((item_id, item_name)),
            PlacementSource::Slot(slot) => state
                .occupancy(*slot)
                .map(|occ| (occ.item_id.as_str(), occ.item_name.as_str()))
                .ok_or(PlaceError::EmptySource(*slot)),
        }
    }
}

impl KitTransition for PlaceAction {
    type Error = PlaceError;

    fn pre_validate(&self, state: &LoadoutState, env: &KitEnv<'_>) -> Result<(), Self::Error> {
        if !state.contains(self.dest) {
            return Err(PlaceError::SlotOutOfRange(self.dest));
        }
        if let Some(source) = self.source_slot() {
            if !state.contains(source) {
                return Err(PlaceError::SlotOutOfRange(source));
            }
        }
        let (id, name) = self.candidate(state)?;

        if self.dest.kind != SlotKind::Wear {
            // Hotbar and main slots accept any id, catalog-known or not.
            return Ok(());
        }

        if id.to_ascii_lowercase().contains("backpack") {
            return Err(PlaceError::BackpackNotWearable);
        }

        let rules = env.rules();
        if rules.is_lock_item(id) {
            // Suit-lock placement: always allowed, evicts the rest of the
            // wear bar during apply.
            return Ok(());
        }
        if state.wear_state().is_locked() {
            return Err(PlaceError::WearBarLocked);
        }
        if !env.catalog().is_attire(id) && !rules.is_extra_wearable(id) {
            return Err(PlaceError::NotWearable {
                id: id.to_owned(),
                name: name.to_owned(),
            });
        }

        // Armor exclusivity: the candidate must not share a conflict group
        // with any item in another wear slot. The destination itself is
        // exempt (its occupant is about to be replaced), as is the source
        // slot of a move.
        let source = self.source_slot();
        for (slot, worn) in state.worn() {
            if slot == self.dest || Some(slot) == source {
                continue;
            }
            if rules.conflicts(id, &worn.item_id) {
                return Err(PlaceError::ConflictingArmor {
                    candidate: id.to_owned(),
                    worn: worn.item_id.clone(),
                });
            }
        }

        Ok(())
    }

    fn apply(&self, state: &mut LoadoutState, env: &KitEnv<'_>) -> Result<(), Self::Error> {
        let occupancy = {
            let (id, name) = self.candidate(state)?;
            Occupancy::new(id, name)
        };
        let source = self.source_slot();

        if let Some(source) = source {
            state.set_occupancy(source, None);
        }
        if self.dest.kind == SlotKind::Wear && env.rules().is_lock_item(&occupancy.item_id) {
            // A lock item occupies the wear bar exclusively.
            state.clear_wear();
        }
        state.set_occupancy(self.dest, Some(occupancy));

        let touched_wear = self.dest.kind == SlotKind::Wear
            || source.is_some_and(|slot| slot.kind == SlotKind::Wear);
        if touched_wear {
            state.refresh_wear_lock(env.rules());
        }
        Ok(())
    }

    fn post_validate(&self, state: &LoadoutState, env: &KitEnv<'_>) -> Result<(), Self::Error> {
        let should_lock = state
            .worn()
            .any(|(_, occ)| env.rules().is_lock_item(&occ.item_id));
        if should_lock != state.wear_state().is_locked() {
            return Err(PlaceError::WearLockDesync(self.dest));
        }
        Ok(())
    }
}
