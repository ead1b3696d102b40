//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after manifest examples.
    pub examples: ExamplePair,
}

/// Before and after manifest examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Declaration that would trigger a finding.
    pub before: &'static str,
    /// Declaration that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_DEPS_CONCRETE_VERSION => Some(explain_concrete_version_check()),
        ids::CODE_CONCRETE_VERSION => Some(explain_concrete_version_code()),
        ids::CODE_CONTEXT_RESOLUTION => Some(explain_context_resolution()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_DEPS_CONCRETE_VERSION]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_CONCRETE_VERSION, ids::CODE_CONTEXT_RESOLUTION]
}

fn explain_concrete_version_check() -> Explanation {
    Explanation {
        title: "No Concrete Dependency Versions",
        description: "\
Detects dependencies whose version, as authored in the manifest, is a literal value
instead of the `${project.version}` placeholder.

The check reads the original model, before any property interpolation. Only the exact
text `${project.version}` is accepted; every other value is reported, including:
- literal versions such as `1.2.3`
- ranges such as `[1.0,2.0)`
- other placeholders such as `${lib.version}` or `${project.version}-SNAPSHOT`

Dependencies without a declared version (managed elsewhere) are never reported.

In lenient mode violations are warnings. In strict mode (`strict = true`, also spelled
`shouldIFail`) the first violation fails the build; with `mode = \"collect\"` every
violation is reported before failing.",
        remediation: "\
Declare the dependency with the project's own version:

    <version>${project.version}</version>

Or drop the `<version>` element and manage the version in a parent or BOM.

If concrete versions are acceptable for this project, disable strict mode so the
findings stay warnings.",
        examples: ExamplePair {
            before: r#"<dependency>
  <groupId>org.example</groupId>
  <artifactId>lib-a</artifactId>
  <version>1.2.3</version>
</dependency>"#,
            after: r#"<dependency>
  <groupId>org.example</groupId>
  <artifactId>lib-a</artifactId>
  <version>${project.version}</version>
</dependency>"#,
        },
    }
}

fn explain_concrete_version_code() -> Explanation {
    let mut exp = explain_concrete_version_check();
    exp.title = "Concrete Version";
    exp
}

fn explain_context_resolution() -> Explanation {
    Explanation {
        title: "Project Context Unavailable",
        description: "\
The dependency list of the original model could not be obtained, so no policy
evaluation took place.

This is an integration fault rather than a policy fault: the project export is
missing, unreadable, or not in the expected shape. It is reported regardless of
strict mode.",
        remediation: "\
Make sure the build exports the authored dependency list before the check runs, and
pass its path with `--project`. Every entry needs an `artifactId`; `version` may be
omitted or null.",
        examples: ExamplePair {
            before: r#"{ "deps": [ { "name": "lib-a" } ] }"#,
            after: r#"{ "dependencies": [ { "artifactId": "lib-a", "version": "${project.version}" } ] }"#,
        },
    }
}
