use crate::context::ProjectContext;
use crate::error::CheckError;
use crate::log::LogSink;
use crate::model::DeclaredDependency;
use crate::policy::{EvaluationMode, PolicyConfiguration, is_variable_version};
use pinguard_types::Location;

/// Informational line written once before evaluation starts.
pub const RULE_BANNER: &str = "Concrete Version Enforcer rule.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Position of the dependency in the input list.
    pub index: usize,
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: String,
    pub location: Option<Location>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
}

/// Everything a single run produced, whether it passed or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    /// In input order; the last entry is the one that stopped a parity run.
    pub violations: Vec<Violation>,
    /// Number of dependencies looked at before the run ended.
    pub evaluated: usize,
    pub total: usize,
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    /// True when later dependencies were skipped after a strict-mode failure.
    pub fn short_circuited(&self) -> bool {
        self.evaluated < self.total
    }

    pub fn failure(&self) -> Option<CheckError> {
        match self.status {
            CheckStatus::Passed => None,
            CheckStatus::Failed => Some(CheckError::PolicyViolation),
        }
    }

    /// Collapse into the host-facing shape: warnings on pass, one error on fail.
    pub fn into_result(self) -> Result<Vec<Violation>, CheckError> {
        match self.status {
            CheckStatus::Passed => Ok(self.violations),
            CheckStatus::Failed => Err(CheckError::PolicyViolation),
        }
    }
}

pub fn concrete_version_warning(artifact_id: &str, version: &str) -> String {
    format!("Attention! Dependency {artifact_id} contains concrete version: {version}")
}

/// Evaluate an already resolved dependency list.
pub fn evaluate(
    deps: &[DeclaredDependency],
    policy: &PolicyConfiguration,
    log: &mut dyn LogSink,
) -> CheckOutcome {
    log.info(RULE_BANNER);
    scan(deps, policy, log)
}

/// Resolve the authored dependency list from `ctx`, then evaluate it.
///
/// A context failure is reported as [`CheckError::ContextResolution`] in every
/// mode; it never becomes a policy violation.
pub fn check_project(
    ctx: &dyn ProjectContext,
    policy: &PolicyConfiguration,
    log: &mut dyn LogSink,
) -> Result<CheckOutcome, CheckError> {
    log.info(RULE_BANNER);
    let deps = ctx
        .original_dependencies()
        .map_err(|source| CheckError::ContextResolution { source })?;
    Ok(scan(&deps, policy, log))
}

fn scan(
    deps: &[DeclaredDependency],
    policy: &PolicyConfiguration,
    log: &mut dyn LogSink,
) -> CheckOutcome {
    let mut violations = Vec::new();
    let mut evaluated = 0;
    let mut status = CheckStatus::Passed;

    for (index, dep) in deps.iter().enumerate() {
        evaluated += 1;

        let Some(version) = dep.version.as_deref() else {
            continue;
        };
        if is_variable_version(version) {
            continue;
        }

        log.warn(&concrete_version_warning(&dep.artifact_id, version));
        violations.push(Violation {
            index,
            group_id: dep.group_id.clone(),
            artifact_id: dep.artifact_id.clone(),
            version: version.to_string(),
            location: dep.location.clone(),
        });

        if policy.strict {
            status = CheckStatus::Failed;
            if policy.mode == EvaluationMode::Parity {
                break;
            }
        }
    }

    CheckOutcome {
        status,
        violations,
        evaluated,
        total: deps.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContextError;
    use crate::log::{LogLevel, RecordingSink};
    use crate::test_support::{dep, failing_context, static_context};

    fn run(
        deps: &[DeclaredDependency],
        policy: PolicyConfiguration,
    ) -> (CheckOutcome, RecordingSink) {
        let mut sink = RecordingSink::new();
        let outcome = evaluate(deps, &policy, &mut sink);
        (outcome, sink)
    }

    #[test]
    fn lenient_concrete_version_passes_with_one_warning() {
        let (outcome, sink) = run(
            &[dep("lib-a", Some("1.2.3"))],
            PolicyConfiguration::lenient(),
        );

        assert!(outcome.is_pass());
        assert_eq!(outcome.violations.len(), 1);
        let warnings: Vec<_> = sink.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("lib-a"));
        assert!(warnings[0].contains("1.2.3"));
    }

    #[test]
    fn strict_concrete_version_fails_with_policy_violation() {
        let (outcome, _) = run(&[dep("lib-a", Some("1.2.3"))], PolicyConfiguration::strict());

        assert!(!outcome.is_pass());
        assert_eq!(outcome.into_result(), Err(CheckError::PolicyViolation));
    }

    #[test]
    fn strict_placeholder_passes_without_warnings() {
        let (outcome, sink) = run(
            &[dep("lib-b", Some("${project.version}"))],
            PolicyConfiguration::strict(),
        );

        assert!(outcome.is_pass());
        assert_eq!(sink.warning_count(), 0);
        assert_eq!(outcome.into_result(), Ok(Vec::new()));
    }

    #[test]
    fn strict_flags_only_the_versioned_dependency() {
        let deps = [dep("lib-c", None), dep("lib-d", Some("2.0"))];
        let (outcome, sink) = run(&deps, PolicyConfiguration::strict());

        assert_eq!(outcome.status, CheckStatus::Failed);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(outcome.violations[0].artifact_id, "lib-d");
        assert_eq!(outcome.violations[0].index, 1);
        assert_eq!(sink.warning_count(), 1);
    }

    #[test]
    fn context_failure_is_not_a_policy_violation() {
        let ctx = failing_context(ContextError::Missing {
            what: "project".to_string(),
        });

        for policy in [PolicyConfiguration::lenient(), PolicyConfiguration::strict()] {
            let mut sink = RecordingSink::new();
            let err = check_project(&ctx, &policy, &mut sink).unwrap_err();
            assert!(matches!(err, CheckError::ContextResolution { .. }));
            assert!(err.to_string().starts_with("Unable to lookup an expression "));
            assert_eq!(sink.warning_count(), 0);
        }
    }

    #[test]
    fn check_project_evaluates_context_dependencies() {
        let ctx = static_context(vec![dep("lib-a", Some("1.0")), dep("lib-b", None)]);
        let mut sink = RecordingSink::new();

        let outcome = check_project(&ctx, &PolicyConfiguration::lenient(), &mut sink).unwrap();
        assert!(outcome.is_pass());
        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.violations.len(), 1);
    }

    #[test]
    fn banner_is_logged_once_before_warnings() {
        let deps = [dep("a", Some("1")), dep("b", Some("2"))];
        let (_, sink) = run(&deps, PolicyConfiguration::lenient());

        assert_eq!(sink.lines[0].level, LogLevel::Info);
        assert_eq!(sink.lines[0].message, RULE_BANNER);
        assert_eq!(
            sink.lines.iter().filter(|l| l.level == LogLevel::Info).count(),
            1
        );
        assert_eq!(
            sink.lines[1].message,
            "Attention! Dependency a contains concrete version: 1"
        );
    }

    #[test]
    fn lenient_reports_every_violation_in_input_order() {
        let deps = [
            dep("z", Some("9")),
            dep("ok", Some("${project.version}")),
            dep("a", Some("1")),
        ];
        let (outcome, sink) = run(&deps, PolicyConfiguration::lenient());

        let ids: Vec<_> = outcome
            .violations
            .iter()
            .map(|v| v.artifact_id.as_str())
            .collect();
        assert_eq!(ids, ["z", "a"]);
        assert_eq!(sink.warning_count(), 2);
        assert!(!outcome.short_circuited());
    }

    #[test]
    fn parity_mode_stops_at_first_violation() {
        let deps = [
            dep("first", Some("1.0")),
            dep("second", Some("2.0")),
            dep("third", Some("${project.version}")),
        ];
        let (outcome, sink) = run(&deps, PolicyConfiguration::strict());

        assert_eq!(outcome.status, CheckStatus::Failed);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(outcome.violations[0].artifact_id, "first");
        assert_eq!(outcome.evaluated, 1);
        assert!(outcome.short_circuited());
        assert_eq!(sink.warning_count(), 1);
    }

    #[test]
    fn collect_mode_reports_all_violations_then_fails_once() {
        let deps = [
            dep("first", Some("1.0")),
            dep("second", Some("2.0")),
            dep("third", Some("${project.version}")),
        ];
        let policy = PolicyConfiguration::strict().with_mode(EvaluationMode::Collect);
        let (outcome, sink) = run(&deps, policy);

        assert_eq!(outcome.status, CheckStatus::Failed);
        assert_eq!(outcome.violations.len(), 2);
        assert_eq!(outcome.evaluated, 3);
        assert!(!outcome.short_circuited());
        assert_eq!(sink.warning_count(), 2);
        assert_eq!(outcome.failure(), Some(CheckError::PolicyViolation));
    }

    #[test]
    fn empty_list_passes_in_every_mode() {
        for policy in [
            PolicyConfiguration::lenient(),
            PolicyConfiguration::strict(),
            PolicyConfiguration::strict().with_mode(EvaluationMode::Collect),
        ] {
            let (outcome, sink) = run(&[], policy);
            assert!(outcome.is_pass());
            assert_eq!(outcome.total, 0);
            assert_eq!(sink.lines.len(), 1);
        }
    }
}
