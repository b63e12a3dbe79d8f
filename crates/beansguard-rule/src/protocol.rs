//! Host plugin protocol.
//!
//! The traits a build orchestrator implements to run beansguard rules. The
//! boundary is deliberately narrow: the host's generic, stringly-typed
//! expression evaluation is reduced to a single `project()` lookup that
//! yields the two values a placement check needs, resolved up front.

use beansguard_core::{LookupError, RuleResult, ValidationContext};

// ---------------------------------------------------------------------------
// Logging sink
// ---------------------------------------------------------------------------

/// Logging sink supplied by the host.
///
/// Part of the protocol shape; rules use it for low-value diagnostics only,
/// never for decision logic or user-facing failure messages.
pub trait RuleLog {
    /// Emit a debug-level diagnostic.
    fn debug(&self, message: &str);

    /// Emit a warning-level diagnostic.
    fn warn(&self, message: &str);
}

/// [`RuleLog`] adapter that forwards to the `tracing` macros.
///
/// Hosts without their own log pipeline can hand out `&TracingLog` and let
/// the ambient subscriber decide what to keep.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl RuleLog for TracingLog {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

// ---------------------------------------------------------------------------
// Host boundary
// ---------------------------------------------------------------------------

/// The host-side collaborator a rule executes against.
///
/// Wraps the build tool's project-model introspection. `project()` stands in
/// for evaluating `${project}` through the host's expression facility: the
/// host resolves the current module's packaging type and base directory once
/// and hands them over as a [`ValidationContext`].
pub trait RuleHelper {
    /// Resolve the project under validation.
    ///
    /// `Ok(None)` means the host could not supply a project at all, which
    /// violates the plugin protocol — rules treat it as a programming error,
    /// not a reportable failure.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the host's evaluation facility fails;
    /// rules re-report it as an environment-lookup failure with the cause
    /// message attached.
    fn project(&self) -> Result<Option<ValidationContext>, LookupError>;

    /// The host's logging sink.
    fn log(&self) -> &dyn RuleLog;
}

// ---------------------------------------------------------------------------
// Rule trait
// ---------------------------------------------------------------------------

/// A build rule the host can execute against each module.
///
/// ## Object Safety
///
/// The trait is object-safe (`Send + Sync`) so hosts can hold rules as
/// `Box<dyn BuildRule>` in their rule registry.
///
/// ## Caching Contract
///
/// The three query methods describe whether the host may reuse a previous
/// outcome instead of re-executing. Placement checks depend on filesystem
/// state that changes between modules and incremental builds, so the single
/// implementer declares itself non-cacheable on all three.
pub trait BuildRule: Send + Sync {
    /// Execute the rule against the current module.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleError`](beansguard_core::RuleError) when the rule is
    /// violated or its inputs could not be resolved; the host halts the
    /// build and surfaces the message verbatim.
    fn execute(&self, helper: &dyn RuleHelper) -> RuleResult<()>;

    /// Identity string used to key cached outcomes. Empty for rules that
    /// declare themselves non-cacheable.
    fn cache_id(&self) -> String;

    /// Whether the host may cache this rule's outcome at all.
    fn is_cacheable(&self) -> bool;

    /// Whether a previously cached outcome — produced by `previous`, if the
    /// host still has it — may be reused for the current invocation.
    fn is_result_reusable(&self, previous: Option<&dyn BuildRule>) -> bool;
}
