use crate::consolidation::domain::SolutionId;
use crate::shared::Result;

/// SolutionRepository port for the remote solution service
///
/// Calls are blocking and made one at a time; no retry happens behind this
/// interface.
pub trait SolutionRepository {
    /// Submits a create-solution payload
    ///
    /// # Returns
    /// The HTTP status code of the response
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or its response read
    fn create_solution(&self, payload: &[u8]) -> Result<u16>;

    /// Requests the export of a created solution
    ///
    /// # Returns
    /// The raw response body
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx response
    fn export_solution(&self, solution_id: &SolutionId) -> Result<Vec<u8>>;
}

impl<T: SolutionRepository + ?Sized> SolutionRepository for &T {
    fn create_solution(&self, payload: &[u8]) -> Result<u16> {
        (**self).create_solution(payload)
    }

    fn export_solution(&self, solution_id: &SolutionId) -> Result<Vec<u8>> {
        (**self).export_solution(solution_id)
    }
}
