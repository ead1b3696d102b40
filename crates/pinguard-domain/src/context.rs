use crate::error::ContextError;
use crate::model::DeclaredDependency;

/// Supplies the dependency list of the project under check.
///
/// Implementations must return the *original* model (as authored, before
/// property interpolation). The effective model always carries concrete
/// versions and would make every dependency a violation.
pub trait ProjectContext {
    fn original_dependencies(&self) -> Result<Vec<DeclaredDependency>, ContextError>;
}

impl<T: ProjectContext + ?Sized> ProjectContext for &T {
    fn original_dependencies(&self) -> Result<Vec<DeclaredDependency>, ContextError> {
        (**self).original_dependencies()
    }
}
