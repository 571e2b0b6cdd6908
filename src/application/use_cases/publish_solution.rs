use crate::consolidation::domain::{SolutionId, WorkflowResult, WorkflowStage};
use crate::consolidation::policies::ExportGate;
use crate::ports::outbound::{ArtifactWriter, RunLogger, SolutionRepository};
use crate::shared::Result;
use anyhow::Context;

/// PublishSolutionUseCase - Creates the consolidated solution, then exports it
///
/// Export only starts once the create call has answered exactly 200; any
/// other create status ends the workflow without an error. Transport and
/// persistence failures are returned as errors. A solution created before a
/// failed export is left as is on the remote side.
///
/// # Type Parameters
/// * `SR` - SolutionRepository implementation
/// * `AW` - ArtifactWriter implementation
/// * `L` - RunLogger implementation
pub struct PublishSolutionUseCase<SR, AW, L> {
    solution_repository: SR,
    artifact_writer: AW,
    logger: L,
}

impl<SR, AW, L> PublishSolutionUseCase<SR, AW, L>
where
    SR: SolutionRepository,
    AW: ArtifactWriter,
    L: RunLogger,
{
    /// Creates a new PublishSolutionUseCase with injected dependencies
    pub fn new(solution_repository: SR, artifact_writer: AW, logger: L) -> Self {
        Self {
            solution_repository,
            artifact_writer,
            logger,
        }
    }

    /// Runs create, then (if allowed) export
    ///
    /// # Arguments
    /// * `solution_id` - Identifier the payload was built for
    /// * `payload` - Serialized create-solution payload
    pub fn execute(&self, solution_id: &SolutionId, payload: &[u8]) -> Result<WorkflowResult> {
        let mut stage = WorkflowStage::Idle;

        stage = self.advance(stage, WorkflowStage::Creating);
        let create_status = self
            .solution_repository
            .create_solution(payload)
            .with_context(|| format!("Error in {}", stage))?;
        self.logger.info(&format!("Create solution status code: {}", create_status));

        if !ExportGate::allows_export(create_status) {
            self.logger.info(&format!(
                "Create solution answered {}; solution {} was not exported.",
                create_status, solution_id
            ));
            return Ok(WorkflowResult::new(
                solution_id.to_string(),
                create_status,
                false,
            ));
        }

        stage = self.advance(stage, WorkflowStage::Exporting);
        let body = self
            .solution_repository
            .export_solution(solution_id)
            .with_context(|| format!("Error in {}", stage))?;

        let path = self
            .artifact_writer
            .write_artifact(&format!("{}.json", solution_id), &body)
            .with_context(|| format!("Error creating solution file for {}", solution_id))?;
        self.logger.info(&format!("Solution file created: {}", path.display()));

        self.advance(stage, WorkflowStage::Done);
        Ok(WorkflowResult::new(solution_id.to_string(), create_status, true))
    }

    fn advance(&self, from: WorkflowStage, to: WorkflowStage) -> WorkflowStage {
        self.logger.info(&format!("Workflow: {} -> {}", from, to));
        to
    }
}
