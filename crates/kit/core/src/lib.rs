//! Deterministic loadout assembly rules and state.
//!
//! `kit-core` defines the canonical placement rules (wear restrictions,
//! armor exclusivity, the full-suit lock) and exposes pure APIs reusable by
//! any presentation layer. All state mutation flows through
//! [`engine::KitEngine`]; catalog data reaches the engine only through the
//! read-only [`catalog::CatalogOracle`] trait.
pub mod action;
pub mod catalog;
pub mod engine;
pub mod env;
pub mod error;
pub mod rules;
pub mod serialize;
pub mod state;

pub use action::{
    ClearAction, ClearAllAction, KitAction, KitTransition, PlaceAction, PlaceError,
    PlacementSource, QuantityError, SetQuantityAction,
};
pub use catalog::{
    ATTIRE_CATEGORY, CatalogOracle, EmptyCatalog, HORSE_SUBCATEGORY, ItemDefinition,
};
pub use engine::{ExecuteError, KitEngine, TransitionPhase, TransitionPhaseError};
pub use env::KitEnv;
pub use error::{ErrorSeverity, KitError};
pub use rules::RuleSet;
pub use serialize::{DEFAULT_KIT_NAME, serialize_commands};
pub use state::{
    LoadoutLayout, LoadoutState, Occupancy, ParseSlotError, SlotKind, SlotRef, WearState,
};
