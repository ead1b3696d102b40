//! The `explain` use case: look up check/code documentation.

use pinguard_types::explain::{self, Explanation};
use std::fmt::Write;

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let underline = "=".repeat(exp.title.len());
    let mut out = format!("{}\n{underline}\n\n{}\n\n", exp.title, exp.description);

    section(&mut out, "Remediation", exp.remediation);
    out.push('\n');
    section(&mut out, "Examples", "");
    fenced(&mut out, "Before (violation):", exp.examples.before);
    out.push('\n');
    fenced(&mut out, "After (fixed):", exp.examples.after);
    out
}

fn section(out: &mut String, heading: &str, body: &str) {
    let _ = writeln!(out, "{heading}\n{}", "-".repeat(heading.len()));
    let _ = writeln!(out, "{body}");
}

fn fenced(out: &mut String, label: &str, body: &str) {
    let _ = writeln!(out, "{label}\n```\n{body}\n```");
}

pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let list = |items: &[&str]| -> String {
        items.iter().map(|i| format!("  - {i}\n")).collect()
    };
    format!(
        "Unknown check_id or code: {identifier}\n\nAvailable check_ids:\n{}\nAvailable codes:\n{}",
        list(check_ids),
        list(codes)
    )
}
