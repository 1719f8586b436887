//! Authoritative loadout state.
//!
//! This module owns slot occupancy and the wear-bar lock flag. Presentation
//! layers read this state freely but mutate it exclusively through
//! [`crate::engine::KitEngine`]; occupancy here is the single source of
//! truth, never a read-back of rendered output.

mod types;

pub use types::{LoadoutLayout, Occupancy, ParseSlotError, SlotKind, SlotRef, WearState};

use crate::rules::RuleSet;

/// Canonical snapshot of the loadout being assembled.
///
/// Slots are fixed in number and kind at construction; only their occupancy
/// and the derived [`WearState`] change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadoutState {
    layout: LoadoutLayout,
    wear: Vec<Option<Occupancy>>,
    hotbar: Vec<Option<Occupancy>>,
    main: Vec<Option<Occupancy>>,
    wear_state: WearState,
}

impl LoadoutState {
    /// Creates an empty loadout with the given slot layout.
    pub fn new(layout: LoadoutLayout) -> Self {
        Self {
            layout,
            wear: vec![None; layout.wear],
            hotbar: vec![None; layout.hotbar],
            main: vec![None; layout.main],
            wear_state: WearState::Unlocked,
        }
    }

    pub fn layout(&self) -> LoadoutLayout {
        self.layout
    }

    pub fn wear_state(&self) -> WearState {
        self.wear_state
    }

    /// Returns true iff the slot exists in this layout.
    pub fn contains(&self, slot: SlotRef) -> bool {
        slot.index < self.bank(slot.kind).len()
    }

    /// Occupancy of a slot, `None` when the slot is empty or out of range.
    pub fn occupancy(&self, slot: SlotRef) -> Option<&Occupancy> {
        self.bank(slot.kind).get(slot.index)?.as_ref()
    }

    /// Returns true iff no slot holds an item.
    pub fn is_empty(&self) -> bool {
        self.slots().all(|(_, occ)| occ.is_none())
    }

    /// Iterates every slot in definition order: wear, then hotbar, then main.
    ///
    /// This is the iteration order the serializer relies on.
    pub fn slots(&self) -> impl Iterator<Item = (SlotRef, Option<&Occupancy>)> {
        fn bank<'a>(
            kind: SlotKind,
            cells: &'a [Option<Occupancy>],
        ) -> impl Iterator<Item = (SlotRef, Option<&'a Occupancy>)> + 'a {
            cells
                .iter()
                .enumerate()
                .map(move |(index, occ)| (SlotRef::new(kind, index), occ.as_ref()))
        }
        bank(SlotKind::Wear, &self.wear)
            .chain(bank(SlotKind::Hotbar, &self.hotbar))
            .chain(bank(SlotKind::Main, &self.main))
    }

    /// Iterates occupied wear slots.
    pub fn worn(&self) -> impl Iterator<Item = (SlotRef, &Occupancy)> {
        self.wear
            .iter()
            .enumerate()
            .filter_map(|(index, occ)| occ.as_ref().map(|occ| (SlotRef::wear(index), occ)))
    }

    fn bank(&self, kind: SlotKind) -> &[Option<Occupancy>] {
        match kind {
            SlotKind::Wear => &self.wear,
            SlotKind::Hotbar => &self.hotbar,
            SlotKind::Main => &self.main,
        }
    }

    fn bank_mut(&mut self, kind: SlotKind) -> &mut [Option<Occupancy>] {
        match kind {
            SlotKind::Wear => &mut self.wear,
            SlotKind::Hotbar => &mut self.hotbar,
            SlotKind::Main => &mut self.main,
        }
    }

    /// Replaces a slot's occupancy outright. No-op when out of range;
    /// actions are expected to range-check during validation.
    pub(crate) fn set_occupancy(&mut self, slot: SlotRef, occupancy: Option<Occupancy>) {
        if let Some(cell) = self.bank_mut(slot.kind).get_mut(slot.index) {
            *cell = occupancy;
        }
    }

    /// Empties every wear slot.
    pub(crate) fn clear_wear(&mut self) {
        self.wear.iter_mut().for_each(|cell| *cell = None);
    }

    /// Empties every slot and forces the wear bar unlocked.
    pub(crate) fn clear_all(&mut self) {
        self.wear.iter_mut().for_each(|cell| *cell = None);
        self.hotbar.iter_mut().for_each(|cell| *cell = None);
        self.main.iter_mut().for_each(|cell| *cell = None);
        self.wear_state = WearState::Unlocked;
    }

    /// Re-derives the wear-bar lock flag from current wear occupancy.
    ///
    /// Invariant: `LockedBySuit` iff some wear slot holds a lock-set item.
    /// Called after every mutation that touches a wear slot.
    pub(crate) fn refresh_wear_lock(&mut self, rules: &RuleSet) {
        let locked = self
            .worn()
            .any(|(_, occ)| rules.is_lock_item(&occ.item_id));
        self.wear_state = if locked {
            WearState::LockedBySuit
        } else {
            WearState::Unlocked
        };
    }
}

impl Default for LoadoutState {
    fn default() -> Self {
        Self::new(LoadoutLayout::default())
    }
}
