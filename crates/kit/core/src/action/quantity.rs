//! Stack size adjustment for hotbar and main slots.

use crate::action::KitTransition;
use crate::env::KitEnv;
use crate::error::{ErrorSeverity, KitError};
use crate::state::{LoadoutState, SlotRef};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("slot {0} does not exist")]
    SlotOutOfRange(SlotRef),

    #[error("slot {0} is empty")]
    SlotEmpty(SlotRef),

    #[error("quantity is fixed at 1 for {0}")]
    QuantityFixed(SlotRef),
}

impl KitError for QuantityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            QuantityError::SlotOutOfRange(_) => "slot_out_of_range",
            QuantityError::SlotEmpty(_) => "slot_empty",
            QuantityError::QuantityFixed(_) => "quantity_fixed",
        }
    }
}

/// Sets the stored quantity of an occupied slot.
///
/// Wear slots reject the edit (they always hold exactly one); requested
/// values clamp to a minimum of 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetQuantityAction {
    pub slot: SlotRef,
    pub quantity: u32,
}

impl SetQuantityAction {
    pub fn new(slot: SlotRef, quantity: u32) -> Self {
        Self { slot, quantity }
    }
}

impl KitTransition for SetQuantityAction {
    type Error = QuantityError;

    fn pre_validate(&self, state: &LoadoutState, _env: &KitEnv<'_>) -> Result<(), Self::Error> {
        if !state.contains(self.slot) {
            return Err(QuantityError::SlotOutOfRange(self.slot));
        }
        if !self.slot.kind.has_quantity() {
            return Err(QuantityError::QuantityFixed(self.slot));
        }
        if state.occupancy(self.slot).is_none() {
            return Err(QuantityError::SlotEmpty(self.slot));
        }
        Ok(())
    }

    fn apply(&self, state: &mut LoadoutState, _env: &KitEnv<'_>) -> Result<(), Self::Error> {
        let occupancy = state
            .occupancy(self.slot)
            .ok_or(QuantityError::SlotEmpty(self.slot))?
            .clone()
            .with_quantity(self.quantity);
        state.set_occupancy(self.slot, Some(occupancy));
        Ok(())
    }
}
