//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - placeholder matching (exact, whole-field only)
//! - pass/fail outcome per mode
//! - determinism and absence of state between runs

use crate::engine::{CheckStatus, evaluate};
use crate::log::RecordingSink;
use crate::model::DeclaredDependency;
use crate::policy::{ALLOWED_PLACEHOLDER, EvaluationMode, PolicyConfiguration, is_variable_version};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_artifact_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,23}").unwrap()
}

/// Versions that are never the allowed placeholder.
fn arb_concrete_version() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..50, 0u32..50, 0u32..50).prop_map(|(a, b, c)| format!("{a}.{b}.{c}")),
        (0u32..10, 0u32..10).prop_map(|(a, b)| format!("[{a}.0,{b}.0)")),
        Just("${project.version}-SNAPSHOT".to_string()),
        Just("x${project.version}".to_string()),
        Just("${project.parent.version}".to_string()),
        prop::string::string_regex("\\$\\{[a-z.]{1,16}\\}")
            .unwrap()
            .prop_filter("not the placeholder", |s| s != ALLOWED_PLACEHOLDER),
    ]
}

fn arb_version() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(ALLOWED_PLACEHOLDER.to_string())),
        arb_concrete_version().prop_map(Some),
    ]
}

fn arb_deps() -> impl Strategy<Value = Vec<DeclaredDependency>> {
    prop::collection::vec(
        (arb_artifact_id(), arb_version()).prop_map(|(id, version)| DeclaredDependency {
            artifact_id: id,
            version,
            ..DeclaredDependency::default()
        }),
        0..16,
    )
}

fn arb_policy() -> impl Strategy<Value = PolicyConfiguration> {
    (
        any::<bool>(),
        prop_oneof![Just(EvaluationMode::Parity), Just(EvaluationMode::Collect)],
    )
        .prop_map(|(strict, mode)| PolicyConfiguration { strict, mode })
}

fn concrete_count(deps: &[DeclaredDependency]) -> usize {
    deps.iter()
        .filter(|d| d.version.as_deref().is_some_and(|v| !is_variable_version(v)))
        .count()
}

proptest! {
    #[test]
    fn placeholder_with_any_affix_is_concrete(prefix in ".{0,4}", suffix in ".{0,4}") {
        prop_assume!(!(prefix.is_empty() && suffix.is_empty()));
        let v = format!("{prefix}{ALLOWED_PLACEHOLDER}{suffix}");
        prop_assert!(!is_variable_version(&v));
    }

    #[test]
    fn all_placeholder_or_absent_always_passes(
        ids in prop::collection::vec(arb_artifact_id(), 0..12),
        absent in prop::collection::vec(any::<bool>(), 12),
        policy in arb_policy(),
    ) {
        let deps: Vec<_> = ids
            .iter()
            .zip(absent.iter())
            .map(|(id, &none)| {
                DeclaredDependency::new(id.clone(), (!none).then_some(ALLOWED_PLACEHOLDER))
            })
            .collect();

        let mut sink = RecordingSink::new();
        let outcome = evaluate(&deps, &policy, &mut sink);

        prop_assert!(outcome.is_pass());
        prop_assert_eq!(sink.warning_count(), 0);
        prop_assert_eq!(outcome.evaluated, deps.len());
    }

    #[test]
    fn outcome_follows_strict_flag(deps in arb_deps(), policy in arb_policy()) {
        let mut sink = RecordingSink::new();
        let outcome = evaluate(&deps, &policy, &mut sink);
        let concrete = concrete_count(&deps);

        if concrete == 0 {
            prop_assert_eq!(outcome.status, CheckStatus::Passed);
            prop_assert_eq!(sink.warning_count(), 0);
        } else {
            prop_assert!(sink.warning_count() >= 1);
            let expected = if policy.strict { CheckStatus::Failed } else { CheckStatus::Passed };
            prop_assert_eq!(outcome.status, expected);
        }

        // One warning line per recorded violation, none for absent versions.
        prop_assert_eq!(sink.warning_count(), outcome.violations.len());
        for v in &outcome.violations {
            prop_assert!(deps[v.index].version.is_some());
        }
    }

    #[test]
    fn mode_only_changes_how_many_violations_are_seen(deps in arb_deps()) {
        let concrete = concrete_count(&deps);

        let lenient = evaluate(&deps, &PolicyConfiguration::lenient(), &mut RecordingSink::new());
        let collect = evaluate(
            &deps,
            &PolicyConfiguration::strict().with_mode(EvaluationMode::Collect),
            &mut RecordingSink::new(),
        );
        let parity = evaluate(&deps, &PolicyConfiguration::strict(), &mut RecordingSink::new());

        prop_assert_eq!(lenient.violations.len(), concrete);
        prop_assert_eq!(&collect.violations, &lenient.violations);
        prop_assert_eq!(parity.violations.len(), concrete.min(1));
        if let Some(first) = parity.violations.first() {
            prop_assert_eq!(first, &lenient.violations[0]);
            prop_assert_eq!(parity.evaluated, first.index + 1);
        }
    }

    #[test]
    fn evaluation_is_idempotent(deps in arb_deps(), policy in arb_policy()) {
        let mut first_sink = RecordingSink::new();
        let mut second_sink = RecordingSink::new();

        let first = evaluate(&deps, &policy, &mut first_sink);
        let second = evaluate(&deps, &policy, &mut second_sink);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_sink.lines, second_sink.lines);
    }
}
