//! Loadout mutation actions.
//!
//! Each user gesture the presentation layer can produce (place an item,
//! adjust a stack, remove an item, clear the board) is a concrete action
//! implementing [`KitTransition`]. Validation lives in `pre_validate`,
//! mutation in `apply`; every action carries its own error enum so
//! rejections stay typed end to end.

mod clear;
mod place;
mod quantity;

pub use clear::{ClearAction, ClearAllAction};
pub use place::{PlaceAction, PlaceError, PlacementSource};
pub use quantity::{QuantityError, SetQuantityAction};

use crate::env::KitEnv;
use crate::state::LoadoutState;

/// Defines how a concrete action variant mutates loadout state.
///
/// Implementors surface pre- and post-conditions around the mutation. The
/// validation hooks receive read-only access to catalog and rule data via
/// [`KitEnv`] and must stay side-effect free; a failing `pre_validate`
/// guarantees the state was not touched.
pub trait KitTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &LoadoutState, _env: &KitEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the loadout state directly.
    /// Implementations may assume `pre_validate` has already passed.
    fn apply(&self, state: &mut LoadoutState, env: &KitEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &LoadoutState, _env: &KitEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// All mutations the engine accepts, one variant per user gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KitAction {
    Place(PlaceAction),
    SetQuantity(SetQuantityAction),
    Clear(ClearAction),
    ClearAll(ClearAllAction),
}
