//! Slot identity and occupancy types.

use core::fmt;
use core::str::FromStr;

/// The three slot families of a loadout.
///
/// `Display`/`FromStr` use the lowercase names (`wear`, `hotbar`, `main`)
/// that the presentation layer exposes; the provisioning container name
/// differs for hotbar slots (see [`SlotKind::container`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKind {
    Wear,
    Hotbar,
    Main,
}

impl SlotKind {
    /// Container name used in provisioning commands.
    pub const fn container(&self) -> &'static str {
        match self {
            SlotKind::Wear => "wear",
            SlotKind::Hotbar => "belt",
            SlotKind::Main => "main",
        }
    }

    /// Returns true iff slots of this kind carry a user-adjustable quantity.
    ///
    /// Wear slots always hold exactly one of an item.
    pub const fn has_quantity(&self) -> bool {
        !matches!(self, SlotKind::Wear)
    }
}

/// Identity of a single slot: kind plus index within that kind.
///
/// Slots are fixed at state construction and addressed by reference; a
/// `SlotRef` may point outside the configured layout, which actions reject
/// during validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRef {
    pub kind: SlotKind,
    pub index: usize,
}

impl SlotRef {
    pub const fn new(kind: SlotKind, index: usize) -> Self {
        Self { kind, index }
    }

    pub const fn wear(index: usize) -> Self {
        Self::new(SlotKind::Wear, index)
    }

    pub const fn hotbar(index: usize) -> Self {
        Self::new(SlotKind::Hotbar, index)
    }

    pub const fn main(index: usize) -> Self {
        Self::new(SlotKind::Main, index)
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.index)
    }
}

impl FromStr for SlotRef {
    type Err = ParseSlotError;

    /// Parses `"<kind> <index>"`, e.g. `"wear 0"` or `"main 12"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let kind = parts.next().ok_or(ParseSlotError)?;
        let index = parts.next().ok_or(ParseSlotError)?;
        if parts.next().is_some() {
            return Err(ParseSlotError);
        }
        let kind = SlotKind::from_str(kind).map_err(|_| ParseSlotError)?;
        let index = index.parse().map_err(|_| ParseSlotError)?;
        Ok(Self::new(kind, index))
    }
}

/// Error parsing a slot reference from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected `<wear|hotbar|main> <index>`")]
pub struct ParseSlotError;

/// Contents of an occupied slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupancy {
    /// Item id in the catalog's original spelling.
    pub item_id: String,
    /// Display name shown to the user.
    pub item_name: String,
    /// Stack size; always 1 in wear slots.
    pub quantity: u32,
}

impl Occupancy {
    /// Fresh occupancy with the default quantity of one.
    pub fn new(item_id: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }
}

/// Wear-bar lock state.
///
/// `LockedBySuit` holds iff at least one wear slot contains a lock-set
/// item; [`crate::state::LoadoutState`] re-derives the flag on every
/// mutation that touches a wear slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WearState {
    #[default]
    Unlocked,
    LockedBySuit,
}

impl WearState {
    pub const fn is_locked(&self) -> bool {
        matches!(self, WearState::LockedBySuit)
    }
}

/// Number of slots of each kind, fixed at state construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadoutLayout {
    pub wear: usize,
    pub hotbar: usize,
    pub main: usize,
}

impl Default for LoadoutLayout {
    /// Standard in-game container sizes.
    fn default() -> Self {
        Self {
            wear: 7,
            hotbar: 6,
            main: 24,
        }
    }
}
