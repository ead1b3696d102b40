//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use pinguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(pinguard_types::PinguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(pinguard_settings::PinguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "pinguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "pinguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture configs and golden reports");
    eprintln!("  conform-full      conform, then run the pinguard binary against every fixture");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

/// Token pattern for check ids and codes: lowercase, digits, `_`, `.`.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.')
}

/// Check that a path is clean: no absolute paths, no `../`, forward slashes only.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.starts_with('\\')
        || path.contains("..")
        || path.contains('\\')
        // Reject Windows-style drive letters like C:
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

fn report_validator() -> anyhow::Result<jsonschema::Validator> {
    let schema = generate_report_schema();
    jsonschema::validator_for(schema.as_value())
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))
}

/// Schema, path and token checks for one report value.
fn report_errors(
    validator: &jsonschema::Validator,
    label: &str,
    value: &serde_json::Value,
) -> Vec<String> {
    let mut errors: Vec<String> = validator
        .iter_errors(value)
        .map(|err| format!("{}: schema validation: {}", label, err))
        .collect();

    let findings = value
        .get("findings")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    for (i, finding) in findings.iter().enumerate() {
        if let Some(path) = finding
            .get("location")
            .and_then(|l| l.get("path"))
            .and_then(|p| p.as_str())
            && !is_clean_path(path)
        {
            errors.push(format!(
                "{}: finding[{}].location.path '{}' is not clean (no absolute, no ../, forward slashes only)",
                label, i, path
            ));
        }

        for key in ["check_id", "code"] {
            if let Some(token) = finding.get(key).and_then(|v| v.as_str())
                && !is_valid_token(token)
            {
                errors.push(format!(
                    "{}: finding[{}].{} '{}' is not a valid token",
                    label, i, key, token
                ));
            }
        }
    }

    errors
}

fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let dir = fixtures_dir()?;
    let mut dirs = Vec::new();
    for entry in fs::read_dir(&dir).context("Failed to read tests/fixtures/")? {
        let path = entry?.path();
        if path.is_dir() && path.join("dependencies.json").exists() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn fixture_name(dir: &Path) -> String {
    dir.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Validate every fixture's config and golden report.
fn conform() -> anyhow::Result<()> {
    let validator = report_validator()?;
    println!("✓ pinguard.report.v1 schema compiles");

    let mut errors = Vec::new();
    let mut golden_count = 0;

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);

        let config_path = dir.join("pinguard.toml");
        if config_path.exists() {
            let text = fs::read_to_string(&config_path)?;
            if let Err(err) = pinguard_settings::parse_config_toml(&text) {
                errors.push(format!("{}/pinguard.toml: {:#}", name, err));
            }
        }

        let golden_path = dir.join("expected.report.json");
        if !golden_path.exists() {
            continue;
        }
        let value = read_json(&golden_path)?;
        errors.extend(report_errors(
            &validator,
            &format!("{}/expected.report.json", name),
            &value,
        ));
        golden_count += 1;
        println!("  ✓ {} validates", name);
    }

    if golden_count == 0 {
        bail!("No golden reports found in tests/fixtures/");
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} golden reports pass conformance checks!", golden_count);
    Ok(())
}

/// `conform`, then run the built binary on each fixture and compare with its golden report.
fn conform_full() -> anyhow::Result<()> {
    conform()?;

    println!("\n--- Full conformance: pinguard binary output ---\n");

    let validator = report_validator()?;
    let bin = project_root()?.join("target").join("debug").join("pinguard");

    #[cfg(target_os = "windows")]
    let bin = bin.with_extension("exe");

    if !bin.exists() {
        bail!(
            "pinguard binary not found at {}.\n\
            Run `cargo build -p pinguard-cli` first.",
            bin.display()
        );
    }

    let mut errors = Vec::new();

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);
        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&bin)
            .arg("--config")
            .arg(dir.join("pinguard.toml"))
            .arg("check")
            .arg("--project")
            .arg(dir.join("dependencies.json"))
            .arg("--report-out")
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run pinguard on fixture '{}'", name))?;

        // 0 and 2 both mean a report was produced; 1 is a tool error.
        if !matches!(output.status.code(), Some(0) | Some(2)) {
            if dir.join("expected.report.json").exists() {
                errors.push(format!(
                    "fixture '{}': pinguard exited with {:?}: {}",
                    name,
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr)
                ));
            }
            continue;
        }

        let report = read_json(&report_out)?;
        errors.extend(report_errors(&validator, &format!("fixture '{}'", name), &report));

        let golden_path = dir.join("expected.report.json");
        if golden_path.exists() {
            let golden = normalize_nondeterministic(read_json(&golden_path)?);
            if normalize_nondeterministic(report) != golden {
                errors.push(format!(
                    "fixture '{}': output differs from expected.report.json",
                    name
                ));
            } else {
                println!("  ✓ fixture '{}' matches golden report", name);
            }
        } else {
            println!("  ✓ fixture '{}' produces a valid report (no golden file)", name);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nFull conformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!(
            "Full conformance validation failed with {} errors",
            errors.len()
        );
    }

    println!("\n✓ Full conformance checks passed!");
    Ok(())
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    use pinguard_types::explain;

    let check_ids = explain::all_check_ids();
    let codes = explain::all_codes();
    let mut errors = Vec::new();

    for (kind, id) in check_ids
        .iter()
        .map(|id| ("Check ID", id))
        .chain(codes.iter().map(|c| ("Code", c)))
    {
        match explain::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{} '{}' has empty title", kind, id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{} '{}' has empty description", kind, id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("{} '{}' has empty remediation", kind, id));
                }
            }
            None => errors.push(format!("{} '{}' has no explanation", kind, id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "conform-full" => conform_full(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
