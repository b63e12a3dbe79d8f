//! The placement check.
//!
//! Pure function of `(packaging type, base directory, filesystem snapshot)`:
//! at most two existence probes, no writes, no state.

use std::path::Path;

use beansguard_core::{policy, LookupError, PlacementViolation, RuleResult, ValidationContext};

/// Check the descriptor placement convention for one module.
///
/// Only active when the module's packaging type is exactly
/// [`policy::GOVERNED_PACKAGING`]; every other packaging type succeeds
/// without touching the filesystem.
///
/// The disallowed-location check runs first and returns immediately, so when
/// the descriptor exists at both locations the "must be moved" failure is
/// the one reported.
///
/// Paths in failure messages are the plain join of the base directory and
/// the policy location — fully resolved, platform-native separators, no
/// canonicalization.
///
/// # Errors
///
/// Returns [`PlacementViolation`] as a rule failure when the convention is
/// violated, or an environment-lookup failure when an existence probe is
/// indeterminate.
pub fn check_descriptor_location(ctx: &ValidationContext) -> RuleResult<()> {
    if ctx.packaging_type() != policy::GOVERNED_PACKAGING {
        tracing::debug!(
            packaging_type = ctx.packaging_type(),
            "packaging type exempt from descriptor placement policy"
        );
        return Ok(());
    }

    let found = ctx.base_dir().join(policy::ejb_or_jar_descriptor());
    let expected = ctx.base_dir().join(policy::webapp_descriptor());

    if probe(&found)? {
        return Err(PlacementViolation::WrongLocation { found, expected }.into());
    }
    if !probe(&expected)? {
        return Err(PlacementViolation::MissingRequiredLocation { expected }.into());
    }

    tracing::debug!(descriptor = %expected.display(), "descriptor placement ok");
    Ok(())
}

/// Existence probe that keeps the I/O failure when the answer is
/// indeterminate, instead of collapsing it to `false`.
fn probe(path: &Path) -> Result<bool, LookupError> {
    path.try_exists().map_err(|source| LookupError::Probe {
        path: path.to_path_buf(),
        source,
    })
}
