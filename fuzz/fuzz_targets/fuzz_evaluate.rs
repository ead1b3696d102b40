//! Fuzz target for policy evaluation.
//!
//! Goal: evaluation never panics, and its outcome agrees with a
//! straightforward recount of concrete versions.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pinguard_domain::evaluate;
use pinguard_domain::log::NullSink;
use pinguard_domain::model::DeclaredDependency;
use pinguard_domain::policy::{EvaluationMode, PolicyConfiguration, is_variable_version};

#[derive(Arbitrary, Debug)]
struct EvaluateInput {
    strict: bool,
    collect: bool,
    /// (artifactId, version) pairs; `None` means no version was authored.
    deps: Vec<(String, Option<String>)>,
}

fuzz_target!(|input: EvaluateInput| {
    if input.deps.len() > 256 {
        return;
    }

    let deps: Vec<DeclaredDependency> = input
        .deps
        .into_iter()
        .map(|(id, version)| DeclaredDependency::new(id, version.as_deref()))
        .collect();

    let mode = if input.collect {
        EvaluationMode::Collect
    } else {
        EvaluationMode::Parity
    };
    let policy = PolicyConfiguration {
        strict: input.strict,
        mode,
    };

    let outcome = evaluate(&deps, &policy, &mut NullSink);

    let concrete = deps
        .iter()
        .filter(|d| d.version.as_deref().is_some_and(|v| !is_variable_version(v)))
        .count();

    assert_eq!(outcome.is_pass(), !(input.strict && concrete > 0));
    if !input.strict || input.collect {
        assert_eq!(outcome.violations.len(), concrete);
    } else {
        assert_eq!(outcome.violations.len(), concrete.min(1));
    }
});
