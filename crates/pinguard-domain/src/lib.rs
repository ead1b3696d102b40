//! Pure policy evaluation (no IO).
//!
//! Input: the authored dependency list, obtained through a [`context::ProjectContext`].
//! Output: violations + pass/fail outcome, plus findings and summary data for reports.

#![forbid(unsafe_code)]

pub mod cache;
pub mod context;
pub mod error;
pub mod fingerprint;
pub mod log;
pub mod model;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{
    CheckOutcome, CheckStatus, RULE_BANNER, Violation, check_project, concrete_version_warning,
    evaluate,
};
pub use error::{CheckError, ContextError, POLICY_VIOLATION_MESSAGE};
