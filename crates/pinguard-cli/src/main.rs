//! CLI entry point for pinguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `pinguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use pinguard_app::{
    CheckInput, ExplainOutput, parse_report_json, render_annotations, render_markdown, run_check,
    run_explain, runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use pinguard_domain::CheckError;
use pinguard_repo::FileContext;
use pinguard_settings::Overrides;
use pinguard_types::{PinguardReport, ids};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "pinguard",
    version,
    about = "Flag dependencies pinned to concrete versions instead of ${project.version}"
)]
struct Cli {
    /// Path to pinguard config TOML (missing file means defaults).
    #[arg(long, default_value = "pinguard.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate policy and write artifacts.
    Check {
        /// JSON export of the original model's dependency list.
        #[arg(long)]
        project: Utf8PathBuf,

        /// Fail when a concrete version is found.
        #[arg(long, conflicts_with = "lenient")]
        strict: bool,

        /// Only warn, even if the config enables strict mode.
        #[arg(long)]
        lenient: bool,

        /// Strict-mode evaluation (parity|collect).
        #[arg(long)]
        mode: Option<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/pinguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/pinguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        #[arg(long, default_value = "artifacts/pinguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        #[arg(long, default_value = "artifacts/pinguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "deps.concrete_version") or code (e.g., "concrete_version").
        identifier: String,
    },
}

struct CheckArgs {
    project: Utf8PathBuf,
    strict: Option<bool>,
    mode: Option<String>,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            project,
            strict,
            lenient,
            mode,
            report_out,
            write_markdown,
            markdown_out,
        } => {
            let strict = match (strict, lenient) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cmd_check(
                &cli.config,
                CheckArgs {
                    project,
                    strict,
                    mode,
                    report_out,
                    write_markdown,
                    markdown_out,
                },
            )
        }
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

/// Logs go to stderr; `RUST_LOG` filters, `PINGUARD_LOG_JSON=1` selects JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("PINGUARD_LOG_JSON").is_ok_and(|v| v == "1" || v == "true");

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(false)
                    .without_time(),
            )
            .init();
    }
}

fn cmd_check(config: &Utf8Path, args: CheckArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(config)?;

        let context = FileContext::new(args.project.clone());
        tracing::debug!(project = %context.path(), "loading project export");
        let input = CheckInput {
            context: &context,
            config_text: &cfg_text,
            overrides: Overrides {
                strict: args.strict,
                mode: args.mode.clone(),
            },
        };

        let output = run_check(input)?;

        write_report_file(&args.report_out, &output.report).context("write report json")?;
        if args.write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(&args.markdown_out, &md).context("write markdown")?;
        }

        if let Err(err) = output.policy_result() {
            tracing::error!("{err}");
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let code = match err.downcast_ref::<CheckError>() {
                Some(CheckError::ContextResolution { .. }) => ids::CODE_CONTEXT_RESOLUTION,
                _ => ids::CODE_RUNTIME_ERROR,
            };
            let report = runtime_error_report(code, &format!("{err:#}"));
            let _ = write_report_file(&args.report_out, &report);
            eprintln!("pinguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// A missing config file means defaults; any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn write_report_file(path: &Utf8Path, report: &PinguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<PinguardReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", pinguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                pinguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
