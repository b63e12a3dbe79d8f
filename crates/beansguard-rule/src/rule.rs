//! The single placement rule implementation.

use beansguard_core::RuleResult;

use crate::protocol::{BuildRule, RuleHelper};
use crate::validation::check_descriptor_location;

/// Enforces the `beans.xml` placement convention for `war`-packaged modules.
///
/// Stateless — one instance can be shared across concurrent module checks.
/// Declares itself non-cacheable on every axis of the caching contract:
/// file placement can change between modules and incremental builds, so
/// every invocation re-runs the filesystem probes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BeansXmlLocationRule;

impl BuildRule for BeansXmlLocationRule {
    /// # Panics
    ///
    /// Panics when the helper resolves the project to `None`. A host that
    /// invokes the rule without a project context is misusing the plugin
    /// protocol; that fault is never converted into a reported rule failure.
    fn execute(&self, helper: &dyn RuleHelper) -> RuleResult<()> {
        let Some(ctx) = helper.project()? else {
            panic!(
                "descriptor placement rule invoked without a project context; \
                 the host must resolve the current project before execution"
            );
        };
        helper
            .log()
            .debug("checking beans.xml placement for the current module");
        check_descriptor_location(&ctx)
    }

    fn cache_id(&self) -> String {
        String::new()
    }

    fn is_cacheable(&self) -> bool {
        false
    }

    fn is_result_reusable(&self, _previous: Option<&dyn BuildRule>) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use beansguard_core::{policy, LookupError, RuleError, ValidationContext, ViolationKind};

    use crate::protocol::{RuleLog, TracingLog};

    use super::*;

    /// Scripted host helper for driving `execute`.
    enum StubProject {
        Resolved(ValidationContext),
        Absent,
        Failing(&'static str),
    }

    struct StubHelper {
        project: StubProject,
    }

    impl StubHelper {
        fn resolved(ctx: ValidationContext) -> Self {
            Self {
                project: StubProject::Resolved(ctx),
            }
        }
    }

    impl RuleHelper for StubHelper {
        fn project(&self) -> Result<Option<ValidationContext>, LookupError> {
            match &self.project {
                StubProject::Resolved(ctx) => Ok(Some(ctx.clone())),
                StubProject::Absent => Ok(None),
                StubProject::Failing(detail) => Err(LookupError::Evaluation {
                    expression: "${project}".to_string(),
                    detail: (*detail).to_string(),
                }),
            }
        }

        fn log(&self) -> &dyn RuleLog {
            &TracingLog
        }
    }

    fn place_descriptor(base: &std::path::Path, rel: &std::path::Path) {
        let target = base.join(rel);
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, b"<beans/>").unwrap();
    }

    #[test]
    fn cache_id_is_always_empty() {
        assert_eq!(BeansXmlLocationRule.cache_id(), "");
    }

    #[test]
    fn rule_is_never_cacheable() {
        assert!(!BeansXmlLocationRule.is_cacheable());
    }

    #[test]
    fn no_previous_result_is_ever_reusable() {
        let rule = BeansXmlLocationRule;
        assert!(!rule.is_result_reusable(None));

        let fresh = BeansXmlLocationRule;
        assert!(!rule.is_result_reusable(Some(&fresh)));

        // Not even the outcome of a rule that already ran successfully.
        let dir = tempfile::tempdir().unwrap();
        place_descriptor(dir.path(), &policy::webapp_descriptor());
        let helper = StubHelper::resolved(ValidationContext::new("war", dir.path()));
        let ran = BeansXmlLocationRule;
        ran.execute(&helper).unwrap();
        assert!(!rule.is_result_reusable(Some(&ran)));
    }

    #[test]
    fn execute_passes_a_conforming_war_module() {
        let dir = tempfile::tempdir().unwrap();
        place_descriptor(dir.path(), &policy::webapp_descriptor());
        let helper = StubHelper::resolved(ValidationContext::new("war", dir.path()));
        assert!(BeansXmlLocationRule.execute(&helper).is_ok());
    }

    #[test]
    fn execute_reports_a_misplaced_descriptor_through_the_protocol() {
        let dir = tempfile::tempdir().unwrap();
        place_descriptor(dir.path(), &policy::ejb_or_jar_descriptor());
        let helper = StubHelper::resolved(ValidationContext::new("war", dir.path()));

        let err = BeansXmlLocationRule.execute(&helper).unwrap_err();
        match &err {
            RuleError::Placement(v) => assert_eq!(v.kind(), ViolationKind::WrongLocation),
            other => panic!("expected a placement violation, got: {other}"),
        }

        let found = dir.path().join(policy::ejb_or_jar_descriptor());
        let expected = dir.path().join(policy::webapp_descriptor());
        let msg = format!("{err}");
        assert_eq!(
            msg,
            format!(
                "File: {} must be moved to: {}",
                found.display(),
                expected.display()
            )
        );
    }

    #[test]
    fn execute_skips_non_war_modules() {
        let dir = tempfile::tempdir().unwrap();
        place_descriptor(dir.path(), &policy::ejb_or_jar_descriptor());
        let helper = StubHelper::resolved(ValidationContext::new("jar", dir.path()));
        assert!(BeansXmlLocationRule.execute(&helper).is_ok());
    }

    #[test]
    fn evaluation_failures_surface_as_environment_lookup_errors() {
        let helper = StubHelper {
            project: StubProject::Failing("project model not yet initialized"),
        };

        let err = BeansXmlLocationRule.execute(&helper).unwrap_err();
        assert!(matches!(err, RuleError::EnvironmentLookup(_)));
        let msg = format!("{err}");
        assert!(msg.starts_with("unable to lookup an expression:"));
        assert!(msg.contains("project model not yet initialized"));
    }

    #[test]
    #[should_panic(expected = "without a project context")]
    fn absent_project_context_is_a_programming_error() {
        let helper = StubHelper {
            project: StubProject::Absent,
        };
        let _ = BeansXmlLocationRule.execute(&helper);
    }

    #[test]
    fn rule_is_usable_as_a_trait_object() {
        let rule: Box<dyn BuildRule> = Box::new(BeansXmlLocationRule);
        assert_eq!(rule.cache_id(), "");
        assert!(!rule.is_cacheable());
        assert!(!rule.is_result_reusable(None));
    }
}
