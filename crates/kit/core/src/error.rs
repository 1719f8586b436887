//! Common error infrastructure for kit-core.
//!
//! Domain-specific errors (e.g. `PlaceError`, `QuantityError`) are defined in
//! their respective modules alongside the actions they validate. This module
//! provides the shared severity classification used to decide how a caller
//! should treat a rejection.

/// Severity level of an error.
///
/// Every rejection the engine produces is local and recoverable for the
/// session; severity distinguishes invalid input from state inconsistencies
/// that indicate a bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - the request was invalid and should be surfaced to
    /// the user, not retried unchanged.
    ///
    /// Examples: non-attire item targeted at a wear slot, locked wear bar
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: wear-lock flag out of sync with slot contents
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all kit-core errors.
///
/// Implemented by every action error enum so callers can classify rejections
/// uniformly (user feedback vs. diagnostics).
pub trait KitError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
