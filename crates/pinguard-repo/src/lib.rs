//! Project context adapters: obtain the authored dependency list for a check.
//!
//! This crate is allowed to do filesystem IO. It does not read manifests; the host build
//! exports the original model's dependency list and this crate loads that export.

#![forbid(unsafe_code)]

mod export;

use camino::{Utf8Path, Utf8PathBuf};
use pinguard_domain::ContextError;
use pinguard_domain::context::ProjectContext;
use pinguard_domain::model::DeclaredDependency;

pub use export::parse_dependency_export;

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
pub mod fuzz {
    /// Parse arbitrary text as a dependency export. **Never panics** on any input.
    pub fn parse_export(text: &str) -> Result<usize, pinguard_domain::ContextError> {
        super::parse_dependency_export(text).map(|deps| deps.len())
    }
}

/// A dependency list held in memory (embedding hosts, tests).
#[derive(Clone, Debug, Default)]
pub struct StaticContext {
    dependencies: Vec<DeclaredDependency>,
}

impl StaticContext {
    pub fn new(dependencies: Vec<DeclaredDependency>) -> Self {
        Self { dependencies }
    }
}

impl ProjectContext for StaticContext {
    fn original_dependencies(&self) -> Result<Vec<DeclaredDependency>, ContextError> {
        Ok(self.dependencies.clone())
    }
}

/// Loads a JSON dependency export written by the host build.
#[derive(Clone, Debug)]
pub struct FileContext {
    path: Utf8PathBuf,
}

impl FileContext {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl ProjectContext for FileContext {
    fn original_dependencies(&self) -> Result<Vec<DeclaredDependency>, ContextError> {
        if !self.path.is_file() {
            return Err(ContextError::Missing {
                what: format!("project export {}", self.path),
            });
        }
        let text = std::fs::read_to_string(&self.path).map_err(|e| ContextError::Read {
            path: self.path.to_string(),
            message: e.to_string(),
        })?;
        parse_dependency_export(&text)
    }
}
