use crate::engine::{CheckOutcome, CheckStatus, Violation};
use crate::fingerprint::fingerprint_for_dep;
use crate::policy::PolicyConfiguration;
use pinguard_types::{Finding, PinguardData, Severity, Verdict, ids};
use serde_json::json;

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: PinguardData,
}

/// Turn an outcome into report material. Findings keep input order.
pub fn build_report(outcome: &CheckOutcome, policy: &PolicyConfiguration) -> DomainReport {
    let severity = if policy.strict {
        Severity::Error
    } else {
        Severity::Warning
    };

    let findings = outcome
        .violations
        .iter()
        .map(|v| violation_finding(v, severity))
        .collect();

    let verdict = match outcome.status {
        CheckStatus::Failed => Verdict::Fail,
        CheckStatus::Passed if outcome.violations.is_empty() => Verdict::Pass,
        CheckStatus::Passed => Verdict::Warn,
    };

    let data = PinguardData {
        strict: policy.strict,
        mode: policy.mode.as_str().to_string(),
        dependencies_total: saturating_count(outcome.total),
        dependencies_evaluated: saturating_count(outcome.evaluated),
        violations: saturating_count(outcome.violations.len()),
        short_circuited: outcome.short_circuited(),
    };

    DomainReport {
        verdict,
        findings,
        data,
    }
}

/// Report counters are `u32`; larger counts clamp instead of wrapping.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn violation_finding(v: &Violation, severity: Severity) -> Finding {
    Finding {
        severity,
        check_id: ids::CHECK_DEPS_CONCRETE_VERSION.to_string(),
        code: ids::CODE_CONCRETE_VERSION.to_string(),
        message: format!(
            "dependency '{}' contains concrete version: {}",
            v.artifact_id, v.version
        ),
        location: v.location.clone(),
        help: Some(
            "Declare the version as `${project.version}`, or omit it and manage it in a parent."
                .to_string(),
        ),
        fingerprint: Some(fingerprint_for_dep(
            ids::CHECK_DEPS_CONCRETE_VERSION,
            ids::CODE_CONCRETE_VERSION,
            v.group_id.as_deref(),
            &v.artifact_id,
            &v.version,
        )),
        data: json!({
            "dependency": v.artifact_id,
            "group": v.group_id,
            "version": v.version,
            "index": v.index,
        }),
    }
}
