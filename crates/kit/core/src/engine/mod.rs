//! Slot assignment engine.
//!
//! [`KitEngine`] is the authoritative reducer for [`LoadoutState`]: every
//! occupancy or wear-lock mutation flows through `execute()`, which drives
//! the requested action through the validate-then-mutate pipeline and
//! surfaces typed rejections. A rejected action leaves the state untouched.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{ClearAction, ClearAllAction, KitAction, PlaceAction, SetQuantityAction};
use crate::env::KitEnv;
use crate::state::{LoadoutState, SlotRef};

/// Engine that owns all loadout mutation.
pub struct KitEngine<'a> {
    state: &'a mut LoadoutState,
}

impl<'a> KitEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut LoadoutState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through its transition pipeline.
    pub fn execute(&mut self, env: &KitEnv<'_>, action: &KitAction) -> Result<(), ExecuteError> {
        transition::execute_transition(action, self.state, env)
    }

    /// Convenience wrapper: place an item (see [`PlaceAction`]).
    pub fn place(&mut self, env: &KitEnv<'_>, action: PlaceAction) -> Result<(), ExecuteError> {
        self.execute(env, &KitAction::Place(action))
    }

    /// Convenience wrapper: set a slot's quantity.
    pub fn set_quantity(
        &mut self,
        env: &KitEnv<'_>,
        slot: SlotRef,
        quantity: u32,
    ) -> Result<(), ExecuteError> {
        self.execute(env, &KitAction::SetQuantity(SetQuantityAction::new(slot, quantity)))
    }

    /// Convenience wrapper: empty a slot. Always succeeds.
    pub fn clear(&mut self, env: &KitEnv<'_>, slot: SlotRef) {
        // Clear is infallible; the execute path cannot reject it.
        let _ = self.execute(env, &KitAction::Clear(ClearAction::new(slot)));
    }

    /// Convenience wrapper: empty every slot and unlock the wear bar.
    pub fn clear_all(&mut self, env: &KitEnv<'_>) {
        let _ = self.execute(env, &KitAction::ClearAll(ClearAllAction));
    }
}
