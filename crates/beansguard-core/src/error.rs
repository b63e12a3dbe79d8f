//! # Error Taxonomy
//!
//! Structured error types for the placement rule, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Three classes of failure exist:
//!
//! 1. [`PlacementViolation`] — the convention was violated; reported to the
//!    build as a controlled rule failure whose message the host surfaces to
//!    the user verbatim.
//! 2. [`LookupError`] — the rule's inputs could not be resolved from the
//!    host environment (expression evaluation or an indeterminate filesystem
//!    probe); also reported, with the cause attached, never swallowed.
//! 3. Protocol misuse — a host invoking the rule without a project context.
//!    That is a programming error and panics instead of producing an error
//!    value; see the rule crate's `execute` documentation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable reason code for a [`PlacementViolation`].
///
/// Serializes as `WRONG_LOCATION` / `MISSING_REQUIRED_LOCATION` so hosts can
/// emit structured diagnostics next to the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// The descriptor exists at the location disallowed for web archives.
    WrongLocation,
    /// The descriptor is absent from the location web archives require.
    MissingRequiredLocation,
}

/// A placement violation, reported to the build as a controlled rule
/// failure.
///
/// Both variants carry fully resolved paths; the `Display` text is the exact
/// message the build tool shows the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementViolation {
    /// The descriptor sits at the EJB/jar location inside a web archive
    /// module. Takes precedence over [`MissingRequiredLocation`] when both
    /// conditions hold.
    ///
    /// [`MissingRequiredLocation`]: PlacementViolation::MissingRequiredLocation
    #[error("File: {} must be moved to: {}", .found.display(), .expected.display())]
    WrongLocation {
        /// Fully resolved path of the misplaced descriptor.
        found: PathBuf,
        /// Fully resolved path where the descriptor must live instead.
        expected: PathBuf,
    },

    /// No descriptor at the location web archives require.
    #[error("war packaging demands that beans.xml exists here: {}", .expected.display())]
    MissingRequiredLocation {
        /// Fully resolved path the descriptor is required at.
        expected: PathBuf,
    },
}

impl PlacementViolation {
    /// The reason code for this violation.
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::WrongLocation { .. } => ViolationKind::WrongLocation,
            Self::MissingRequiredLocation { .. } => ViolationKind::MissingRequiredLocation,
        }
    }
}

/// A failure resolving the rule's inputs from the host environment.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The host's expression-evaluation facility failed.
    #[error("expression {expression:?} could not be evaluated: {detail}")]
    Evaluation {
        /// The expression handed to the host facility.
        expression: String,
        /// The host-reported failure description.
        detail: String,
    },

    /// A filesystem existence probe was indeterminate (for example a
    /// permission failure on a parent directory). Not retried.
    #[error("filesystem probe failed for {}: {source}", .path.display())]
    Probe {
        /// The path being probed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Failure modes reported by a rule execution.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The placement convention was violated.
    #[error(transparent)]
    Placement(#[from] PlacementViolation),

    /// Inputs could not be resolved from the host environment.
    #[error("unable to lookup an expression: {0}")]
    EnvironmentLookup(#[from] LookupError),
}

/// Result alias for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;
