/// The only version expression a dependency may declare.
pub const ALLOWED_PLACEHOLDER: &str = "${project.version}";

/// How strict mode treats the dependencies after the first violation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Stop at the first violation.
    #[default]
    Parity,
    /// Evaluate every dependency, then fail once.
    Collect,
}

impl EvaluationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluationMode::Parity => "parity",
            EvaluationMode::Collect => "collect",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolicyConfiguration {
    /// Escalate violations to a failure (`shouldIFail`).
    pub strict: bool,
    pub mode: EvaluationMode,
}

impl PolicyConfiguration {
    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            strict: true,
            mode: EvaluationMode::Parity,
        }
    }

    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }
}

/// True iff the whole field is the allowed placeholder, byte for byte.
pub fn is_variable_version(version: &str) -> bool {
    version == ALLOWED_PLACEHOLDER
}
