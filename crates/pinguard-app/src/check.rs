//! The `check` use case: evaluate policy and produce a report.

use anyhow::Context;
use pinguard_domain::context::ProjectContext;
use pinguard_domain::report::build_report;
use pinguard_domain::{CheckError, CheckOutcome, Violation, check_project};
use pinguard_settings::{Overrides, ResolvedConfig};
use pinguard_types::{PinguardReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

use crate::logging::TracingSink;

/// Input for the check use case.
pub struct CheckInput<'a> {
    /// Source of the authored dependency list.
    pub context: &'a dyn ProjectContext,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: PinguardReport,
    pub outcome: CheckOutcome,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

impl CheckOutput {
    /// Host-facing result: the warnings on pass, the policy violation on fail.
    pub fn policy_result(&self) -> Result<Vec<Violation>, CheckError> {
        self.outcome.clone().into_result()
    }
}

/// Run the check use case: parse config, resolve the project context, evaluate, produce report.
///
/// A project context that cannot be resolved is returned as an error (downcastable to
/// [`CheckError`]); a policy violation is not an error here, it is a failing report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        pinguard_settings::PinguardConfigV1::default()
    } else {
        pinguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        pinguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    let policy = resolved.policy;
    tracing::debug!(strict = policy.strict, mode = policy.mode.as_str(), "resolved policy");

    let outcome = check_project(input.context, &policy, &mut TracingSink)
        .context("resolve project context")?;

    let domain_report = build_report(&outcome, &policy);
    let finished_at = OffsetDateTime::now_utc();

    tracing::debug!(
        total = outcome.total,
        evaluated = outcome.evaluated,
        violations = outcome.violations.len(),
        "evaluation finished"
    );

    let report = PinguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pinguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        outcome,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinguard_domain::ContextError;
    use pinguard_domain::model::DeclaredDependency;
    use pinguard_repo::{FileContext, StaticContext};

    fn input<'a>(ctx: &'a dyn ProjectContext, config_text: &'a str) -> CheckInput<'a> {
        CheckInput {
            context: ctx,
            config_text,
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn empty_config_is_lenient() {
        let ctx = StaticContext::new(vec![DeclaredDependency::new("lib-a", Some("1.2.3"))]);
        let output = run_check(input(&ctx, "")).expect("run_check");

        assert!(!output.resolved_config.policy.strict);
        assert_eq!(output.report.verdict, Verdict::Warn);
        assert_eq!(output.report.findings.len(), 1);
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert!(output.policy_result().is_ok());
    }

    #[test]
    fn strict_config_fails_report() {
        let ctx = StaticContext::new(vec![
            DeclaredDependency::new("lib-c", None),
            DeclaredDependency::new("lib-d", Some("2.0")),
        ]);
        let output = run_check(input(&ctx, "strict = true\n")).expect("run_check");

        assert_eq!(output.report.verdict, Verdict::Fail);
        assert_eq!(output.report.findings.len(), 1);
        assert_eq!(output.report.findings[0].data["dependency"], "lib-d");
        assert_eq!(output.policy_result(), Err(CheckError::PolicyViolation));
        assert_eq!(verdict_exit_code(output.report.verdict), 2);
    }

    #[test]
    fn unresolvable_context_is_an_error_not_a_report() {
        let ctx = FileContext::new("definitely/not/here.json");
        let err = run_check(input(&ctx, "strict = false\n")).unwrap_err();

        let check_err = err.downcast_ref::<CheckError>().expect("CheckError in chain");
        assert!(matches!(
            check_err,
            CheckError::ContextResolution {
                source: ContextError::Missing { .. }
            }
        ));
    }

    #[test]
    fn invalid_config_is_reported() {
        let ctx = StaticContext::default();
        let err = run_check(input(&ctx, "mode = \"everything\"\n")).unwrap_err();
        assert!(format!("{err:#}").contains("resolve config"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
