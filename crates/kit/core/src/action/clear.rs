//! Removal actions. These never fail: clearing an empty or out-of-range
//! slot is a no-op.

use core::convert::Infallible;

use crate::action::KitTransition;
use crate::env::KitEnv;
use crate::state::{LoadoutState, SlotKind, SlotRef};

/// Empties a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearAction {
    pub slot: SlotRef,
}

impl ClearAction {
    pub fn new(slot: SlotRef) -> Self {
        Self { slot }
    }
}

impl KitTransition for ClearAction {
    type Error = Infallible;

    fn apply(&self, state: &mut LoadoutState, env: &KitEnv<'_>) -> Result<(), Self::Error> {
        state.set_occupancy(self.slot, None);
        if self.slot.kind == SlotKind::Wear {
            state.refresh_wear_lock(env.rules());
        }
        Ok(())
    }
}

/// Empties every slot and forces the wear bar unlocked, unconditionally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearAllAction;

impl KitTransition for ClearAllAction {
    type Error = Infallible;

    fn apply(&self, state: &mut LoadoutState, _env: &KitEnv<'_>) -> Result<(), Self::Error> {
        state.clear_all();
        Ok(())
    }
}
