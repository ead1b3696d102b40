use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for pinguard reports.
pub const SCHEMA_REPORT_V1: &str = "pinguard.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Where a dependency was declared, when the host export knows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and trending. A SHA-256 over
    /// `check_id`, `code`, group, artifact and version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Pinguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct PinguardData {
    /// Whether violations escalate to a failing verdict.
    pub strict: bool,
    /// Strict-mode evaluation strategy: `parity` or `collect`.
    pub mode: String,

    pub dependencies_total: u32,
    pub dependencies_evaluated: u32,
    pub violations: u32,

    /// True when evaluation stopped at the first violation.
    #[serde(default)]
    pub short_circuited: bool,
}

/// A generic report envelope.
///
/// Keeping this generic allows tool-specific data while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = PinguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type PinguardReport = ReportEnvelope<PinguardData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_and_verdict_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Severity::Warning).unwrap(), json!("warning"));
        assert_eq!(serde_json::to_value(Verdict::Fail).unwrap(), json!("fail"));
    }

    #[test]
    fn finding_omits_empty_optionals() {
        let finding = Finding {
            severity: Severity::Error,
            check_id: "deps.concrete_version".to_string(),
            code: "concrete_version".to_string(),
            message: "m".to_string(),
            location: None,
            help: None,
            fingerprint: None,
            data: JsonValue::Null,
        };
        let value = serde_json::to_value(&finding).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("location"));
        assert!(!obj.contains_key("help"));
        assert!(!obj.contains_key("data"));

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["check_id", "code", "message", "severity"]);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = PinguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "pinguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: time::macros::datetime!(2024-01-01 0:00 UTC),
            finished_at: time::macros::datetime!(2024-01-01 0:00:01 UTC),
            verdict: Verdict::Warn,
            findings: Vec::new(),
            data: PinguardData {
                strict: false,
                mode: "parity".to_string(),
                dependencies_total: 2,
                dependencies_evaluated: 2,
                violations: 1,
                short_circuited: false,
            },
        };
        let text = serde_json::to_string(&report).unwrap();
        assert!(text.contains("2024-01-01T00:00:00Z"));
        let back: PinguardReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }
}
