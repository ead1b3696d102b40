//! The host's dependency export format.
//!
//! ```json
//! { "manifest": "pom.xml",
//!   "dependencies": [ { "groupId": "g", "artifactId": "a", "version": "1.0", "line": 12 } ] }
//! ```

use pinguard_domain::ContextError;
use pinguard_domain::model::DeclaredDependency;
use pinguard_types::Location;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectExport {
    /// Repo-relative manifest the list was taken from.
    #[serde(default)]
    manifest: Option<String>,
    dependencies: Option<Vec<ExportedDependency>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportedDependency {
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    artifact_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    line: Option<u32>,
}

/// Parse an export into declared dependencies, preserving order.
pub fn parse_dependency_export(text: &str) -> Result<Vec<DeclaredDependency>, ContextError> {
    let export: ProjectExport = serde_json::from_str(text).map_err(|e| ContextError::Malformed {
        message: e.to_string(),
    })?;

    let Some(entries) = export.dependencies else {
        return Err(ContextError::Malformed {
            message: "missing `dependencies` array".to_string(),
        });
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let artifact_id = entry
                .artifact_id
                .filter(|a| !a.trim().is_empty())
                .ok_or_else(|| ContextError::Malformed {
                    message: format!("dependency #{i} has no artifactId"),
                })?;

            let location = export.manifest.as_ref().map(|path| Location {
                path: path.clone(),
                line: entry.line,
                col: None,
            });

            Ok(DeclaredDependency {
                group_id: entry.group_id,
                artifact_id,
                version: entry.version,
                location,
            })
        })
        .collect()
}
