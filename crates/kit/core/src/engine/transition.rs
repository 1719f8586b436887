//! Action transition dispatch and execution logic.

use crate::action::{KitAction, KitTransition};
use crate::env::KitEnv;
use crate::state::LoadoutState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the loadout state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut LoadoutState,
    env: &KitEnv<'_>,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: KitTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(())
}

/// Routes an action to its transition. Internal implementation used by
/// [`super::KitEngine::execute`].
pub(super) fn execute_transition(
    action: &KitAction,
    state: &mut LoadoutState,
    env: &KitEnv<'_>,
) -> Result<(), ExecuteError> {
    match action {
        KitAction::Place(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Place)
        }
        KitAction::SetQuantity(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::SetQuantity)
        }
        KitAction::Clear(transition) => {
            drive_transition(transition, state, env).unwrap_or_else(|err| match err.error {});
            Ok(())
        }
        KitAction::ClearAll(transition) => {
            drive_transition(transition, state, env).unwrap_or_else(|err| match err.error {});
            Ok(())
        }
    }
}
