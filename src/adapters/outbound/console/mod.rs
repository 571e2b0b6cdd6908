/// Console adapters for user interaction
mod solution_id_prompt;

pub use solution_id_prompt::{FixedSolutionId, PromptSolutionIdProvider};
