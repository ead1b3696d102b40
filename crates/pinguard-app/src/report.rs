use anyhow::Context;
use pinguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdict,
};
use pinguard_types::{
    Finding, PinguardData, PinguardReport, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<PinguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse pinguard report")
}

pub fn serialize_report(report: &PinguardReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report)?;
    data.push(b'\n');
    Ok(data)
}

/// A failing report for a run that never reached policy evaluation.
///
/// `code` is [`ids::CODE_CONTEXT_RESOLUTION`] when the project could not be supplied,
/// [`ids::CODE_RUNTIME_ERROR`] otherwise.
pub fn runtime_error_report(code: &str, message: &str) -> PinguardReport {
    let now = OffsetDateTime::now_utc();
    PinguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pinguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: code.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the error above and re-run the check.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: PinguardData::default(),
    }
}

pub fn to_renderable(report: &PinguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                severity: match f.severity {
                    Severity::Info => RenderableSeverity::Info,
                    Severity::Warning => RenderableSeverity::Warning,
                    Severity::Error => RenderableSeverity::Error,
                },
                check_id: f.check_id.clone(),
                code: f.code.clone(),
                message: f.message.clone(),
                location: f.location.as_ref().map(|l| RenderableLocation {
                    path: l.path.clone(),
                    line: l.line,
                    col: l.col,
                }),
                help: f.help.clone(),
            })
            .collect(),
        data: RenderableData {
            strict: report.data.strict,
            dependencies_total: report.data.dependencies_total,
            dependencies_evaluated: report.data.dependencies_evaluated,
            short_circuited: report.data.short_circuited,
        },
    }
}
