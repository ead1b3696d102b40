use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `pinguard.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PinguardConfigV1 {
    /// Optional schema string for tooling (`pinguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Fail the build when a concrete version is found (default `false`).
    #[serde(
        default,
        alias = "shouldIFail",
        skip_serializing_if = "Option::is_none"
    )]
    pub strict: Option<bool>,

    /// Strict-mode evaluation: `parity` (stop at first violation) or `collect`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}
