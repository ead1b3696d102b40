use thiserror::Error;

/// Fixed failure text for a strict-mode violation.
pub const POLICY_VIOLATION_MESSAGE: &str =
    "Failing because a Concrete Version was found in the dependencies section of the pom";

/// Why the authored dependency list could not be obtained.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("{what} is not available")]
    Missing { what: String },

    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("malformed project export: {message}")]
    Malformed { message: String },
}

/// The two ways a check can end without passing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Strict mode found a concrete version.
    #[error("{}", POLICY_VIOLATION_MESSAGE)]
    PolicyViolation,

    /// The host could not supply the dependency list.
    #[error("Unable to lookup an expression {source}")]
    ContextResolution {
        #[source]
        source: ContextError,
    },
}
