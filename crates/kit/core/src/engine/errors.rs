//! Error types for the action execution pipeline.

use crate::action::{KitTransition, PlaceAction, SetQuantityAction};
use crate::error::{ErrorSeverity, KitError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the kit engine.
///
/// Removal actions are infallible and have no variant here.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("place action failed: {0}")]
    Place(TransitionPhaseError<<PlaceAction as KitTransition>::Error>),

    #[error("set quantity action failed: {0}")]
    SetQuantity(TransitionPhaseError<<SetQuantityAction as KitTransition>::Error>),
}

impl ExecuteError {
    /// Severity of the underlying rejection.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Place(err) => err.error.severity(),
            ExecuteError::SetQuantity(err) => err.error.severity(),
        }
    }
}
