use crate::context::ProjectContext;
use crate::error::ContextError;
use crate::model::DeclaredDependency;

pub fn dep(artifact_id: &str, version: Option<&str>) -> DeclaredDependency {
    DeclaredDependency::new(artifact_id, version).with_group("org.example")
}

pub struct TestContext {
    result: Result<Vec<DeclaredDependency>, ContextError>,
}

impl ProjectContext for TestContext {
    fn original_dependencies(&self) -> Result<Vec<DeclaredDependency>, ContextError> {
        self.result.clone()
    }
}

pub fn static_context(deps: Vec<DeclaredDependency>) -> TestContext {
    TestContext { result: Ok(deps) }
}

pub fn failing_context(err: ContextError) -> TestContext {
    TestContext { result: Err(err) }
}
