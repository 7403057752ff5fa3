//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`ActionError`, `UnitError`, `SnapshotError`) live
//! next to the code that raises them. This module provides the shared
//! classification used by the runtime to decide how a failure is surfaced.
//!
//! No error in this crate is fatal to a match: every variant maps to one of
//! the recovery strategies below.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The user asked for something the rules forbid.
    ///
    /// Examples: target out of range, destination occupied, wrong turn.
    /// Surfaced as a transient notice; state is untouched.
    InvalidAction,

    /// The request referred to a cell whose unit no longer exists.
    ///
    /// Recovered by clearing the selection.
    StaleReference,

    /// Persisted data could not be turned back into a valid match.
    ///
    /// Treated exactly like "no save exists".
    CorruptedState,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidAction => "invalid_action",
            Self::StaleReference => "stale_reference",
            Self::CorruptedState => "corrupted_state",
        }
    }

    /// Returns true if recovering from this error clears the selection.
    pub const fn clears_selection(&self) -> bool {
        matches!(self, Self::StaleReference)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by recovery strategy, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
