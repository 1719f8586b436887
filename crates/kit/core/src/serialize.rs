//! Projection of slot occupancy into provisioning commands.
//!
//! One line per occupied slot, in slot definition order (wear, hotbar,
//! main). The command grammar is consumed verbatim by an external
//! game-server tool and must not be reformatted.

use crate::state::{LoadoutState, SlotKind};

/// Kit name used when the caller supplies a blank one.
pub const DEFAULT_KIT_NAME: &str = "MyKit";

/// Fixed protocol field between quantity and container. Its meaning is not
/// observable from the consuming tool; emit it verbatim.
const RESERVED_FIELD: &str = "1";

/// Serializes the loadout as `kit add` command lines.
///
/// Wear slots always serialize with quantity 1. Empty slots contribute no
/// line; an empty loadout yields the empty string. A blank or
/// whitespace-only kit name falls back to [`DEFAULT_KIT_NAME`].
pub fn serialize_commands(kit_name: &str, state: &LoadoutState) -> String {
    let kit_name = match kit_name.trim() {
        "" => DEFAULT_KIT_NAME,
        trimmed => trimmed,
    };

    let lines: Vec<String> = state
        .slots()
        .filter_map(|(slot, occupancy)| {
            let occupancy = occupancy?;
            let quantity = match slot.kind {
                SlotKind::Wear => 1,
                _ => occupancy.quantity.max(1),
            };
            Some(format!(
                "kit add \"{kit_name}\" \"{id}\" {quantity} {RESERVED_FIELD} {container}",
                id = occupancy.item_id,
                container = slot.kind.container(),
            ))
        })
        .collect();

    lines.join("\n")
}
