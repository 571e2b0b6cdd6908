/// Use cases module containing application business logic orchestration
mod consolidate_solutions;
mod publish_solution;

pub use consolidate_solutions::{ConsolidateSolutionsUseCase, PAYLOAD_FILE_NAME};
pub use publish_solution::PublishSolutionUseCase;
