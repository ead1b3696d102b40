use crate::model::PinguardConfigV1;
use anyhow::Context;
use pinguard_domain::policy::{EvaluationMode, PolicyConfiguration};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub strict: Option<bool>,
    pub mode: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: PolicyConfiguration,
}

pub fn resolve_config(
    cfg: PinguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut policy = PolicyConfiguration::default();

    if let Some(strict) = overrides.strict.or(cfg.strict) {
        policy.strict = strict;
    }

    if let Some(mode) = overrides.mode.as_deref().or(cfg.mode.as_deref()) {
        policy.mode = parse_mode(mode).context("invalid mode")?;
    }

    Ok(ResolvedConfig { policy })
}

pub fn parse_mode(v: &str) -> anyhow::Result<EvaluationMode> {
    match v {
        "parity" => Ok(EvaluationMode::Parity),
        "collect" => Ok(EvaluationMode::Collect),
        other => anyhow::bail!("unknown mode: {other} (expected 'parity' or 'collect')"),
    }
}
