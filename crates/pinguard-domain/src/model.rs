use pinguard_types::Location;

/// A dependency exactly as authored in the manifest, before interpolation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclaredDependency {
    pub group_id: Option<String>,
    pub artifact_id: String,
    /// `None` when the declaration carries no version (managed elsewhere).
    pub version: Option<String>,
    pub location: Option<Location>,
}

impl DeclaredDependency {
    pub fn new(artifact_id: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            group_id: None,
            artifact_id: artifact_id.into(),
            version: version.map(str::to_string),
            location: None,
        }
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}
