//! Mapping of engine outcomes and catalog data to user-facing text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use kit_core::{
    ErrorSeverity, ExecuteError, ItemDefinition, LoadoutState, PlaceError, QuantityError,
};

/// Base URL of the knowledge base serving item images.
const IMAGE_BASE_URL: &str = "https://kb.veretech.systems";

/// Shown when an item has no catalog image.
const PLACEHOLDER_IMAGE: &str = "https://kb.veretech.systems/images/placeholder.png";

/// User-facing message for a rejected action.
pub fn rejection_message(error: &ExecuteError) -> String {
    if error.severity() == ErrorSeverity::Internal {
        tracing::error!(%error, "internal engine error");
        return format!("internal error: {error}");
    }
    match error {
        ExecuteError::Place(err) => match &err.error {
            PlaceError::BackpackNotWearable => "Backpacks cannot go in the wear bar!".to_owned(),
            PlaceError::WearBarLocked => "Wear bar is locked by a full suit.".to_owned(),
            PlaceError::NotWearable { name, .. } => format!(
                "\"{name}\" cannot be placed in wear slots. Only Attire or special wearable items are allowed."
            ),
            PlaceError::ConflictingArmor { candidate, worn } => {
                format!("Cannot wear {candidate} with {worn}")
            }
            other => other.to_string(),
        },
        ExecuteError::SetQuantity(err) => match &err.error {
            QuantityError::QuantityFixed(slot) => {
                format!("Quantity is fixed at 1 for wear slot {slot}.")
            }
            other => other.to_string(),
        },
    }
}

/// Full image URL for an item's catalog image path.
///
/// Mirrors the knowledge-base convention: strip a leading `./`, prefix the
/// base URL, append `.png`. Items without an image get the placeholder.
pub fn image_url(image_path: Option<&str>) -> String {
    match image_path {
        Some(path) => {
            let clean = path.strip_prefix("./").unwrap_or(path);
            format!("{IMAGE_BASE_URL}/{clean}.png")
        }
        None => PLACEHOLDER_IMAGE.to_owned(),
    }
}

/// Base64 install code for a generated command block.
pub fn install_code(commands: &str) -> String {
    STANDARD.encode(commands)
}

/// One line per item for browse/search output.
pub fn render_items(items: &[&ItemDefinition]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{:<28} {}  [{} / {}]",
                item.id, item.name, item.category, item.subcategory
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Occupied slots, one per line, in slot order.
pub fn render_loadout(state: &LoadoutState) -> String {
    let lock = if state.wear_state().is_locked() {
        "locked by a full suit"
    } else {
        "unlocked"
    };
    let mut out = format!("wear bar: {lock}");
    for (slot, occupancy) in state.slots() {
        if let Some(occupancy) = occupancy {
            out.push_str(&format!(
                "\n{:<10} {} x{}",
                slot.to_string(),
                occupancy.item_id,
                occupancy.quantity
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_urls_follow_the_kb_convention() {
        assert_eq!(
            image_url(Some("./images/rifle.ak")),
            "https://kb.veretech.systems/images/rifle.ak.png"
        );
        assert_eq!(
            image_url(Some("images/wood")),
            "https://kb.veretech.systems/images/wood.png"
        );
        assert_eq!(image_url(None), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn install_code_round_trips() {
        let commands = "kit add \"MyKit\" \"wood\" 10 1 main";
        let decoded = STANDARD.decode(install_code(commands)).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), commands);
    }
}
