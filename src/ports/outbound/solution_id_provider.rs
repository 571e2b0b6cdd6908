use crate::consolidation::domain::SolutionId;
use crate::shared::Result;

/// SolutionIdProvider port supplying the identifier of the new solution
///
/// Implementations may take it from the command line or ask the user.
pub trait SolutionIdProvider {
    /// # Errors
    /// Returns an error if no identifier can be obtained or it is invalid
    fn solution_id(&self) -> Result<SolutionId>;
}

impl<T: SolutionIdProvider + ?Sized> SolutionIdProvider for Box<T> {
    fn solution_id(&self) -> Result<SolutionId> {
        (**self).solution_id()
    }
}
