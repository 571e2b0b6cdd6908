use crate::application::dto::{ConsolidationRequest, ConsolidationResponse};
use crate::consolidation::domain::FlatComponent;
use crate::consolidation::services::{
    ComponentFlattener, DedupedSet, Deduplicator, PayloadBuilder, SnapshotParser,
};
use crate::ports::outbound::{ArtifactWriter, RunLogger, SnapshotReader, SolutionIdProvider};
use crate::shared::Result;
use std::path::Path;


/// File the create-solution payload is written to
pub const PAYLOAD_FILE_NAME: &str = "payload.json";

/// ConsolidateSolutionsUseCase - Merges solution exports into one payload
///
/// Loads every snapshot in the source directory, flattens and deduplicates
/// their components, builds the create-solution payload and writes it to
/// `payload.json`. The first unreadable or unparsable file aborts the run.
///
/// # Type Parameters
/// * `SR` - SnapshotReader implementation
/// * `SIP` - SolutionIdProvider implementation
/// * `AW` - ArtifactWriter implementation
/// * `L` - RunLogger implementation
pub struct ConsolidateSolutionsUseCase<SR, SIP, AW, L> {
    snapshot_reader: SR,
    solution_id_provider: SIP,
    artifact_writer: AW,
    logger: L,
    payload_builder: PayloadBuilder,
}

impl<SR, SIP, AW, L> ConsolidateSolutionsUseCase<SR, SIP, AW, L>
where
    SR: SnapshotReader,
    SIP: SolutionIdProvider,
    AW: ArtifactWriter,
    L: RunLogger,
{
    /// Creates a new ConsolidateSolutionsUseCase with injected dependencies
    pub fn new(
        snapshot_reader: SR,
        solution_id_provider: SIP,
        artifact_writer: AW,
        logger: L,
        payload_builder: PayloadBuilder,
    ) -> Self {
        Self {
            snapshot_reader,
            solution_id_provider,
            artifact_writer,
            logger,
            payload_builder,
        }
    }

    /// Executes the consolidation use case
    pub fn execute(&self, request: ConsolidationRequest) -> Result<ConsolidationResponse> {
        // Step 1: Load and flatten every snapshot
        let (snapshot_count, records) = self.load_records(&request.solutions_dir)?;
        let record_count = records.len();

        // Step 2: Keep the latest version of each component
        let components = self.merge(records);

        // Step 3: Build and persist the payload
        self.logger.info("Constructing payload...");
        let solution_id = self.solution_id_provider.solution_id()?;
        let payload = self.payload_builder.build(&solution_id, &components);
        let payload_bytes = payload.to_json_bytes()?;
        let payload_path = self
            .artifact_writer
            .write_artifact(PAYLOAD_FILE_NAME, &payload_bytes)?;
        self.logger.info(&format!(
            "Payload constructed with {} component(s): {}",
            payload.export_components.len(),
            payload_path.display()
        ));

        Ok(ConsolidationResponse {
            snapshot_count,
            record_count,
            components,
            solution_id,
            payload,
            payload_bytes,
            payload_path,
        })
    }

    fn load_records(&self, directory: &Path) -> Result<(usize, Vec<FlatComponent>)> {
        self.logger.info(&format!(
            "Getting files from {} directory",
            directory.display()
        ));

        let files = self.snapshot_reader.list_snapshot_files(directory)?;
        self.logger.info(&format!(
            "Got {} snapshot file(s) from the target directory",
            files.len()
        ));

        let mut records = Vec::new();
        for path in &files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.logger.info(&format!("Opening {} file...", name));

            let bytes = self.snapshot_reader.read_snapshot_file(path)?;
            let snapshot = SnapshotParser::parse(&bytes, path)?;

            if snapshot.components().is_empty() {
                self.logger.info(&format!(
                    "Solution {} in {} has no components",
                    snapshot.solution_id(),
                    name
                ));
            }

            records.extend(ComponentFlattener::flatten(&snapshot));
        }

        if records.is_empty() {
            self.logger.info("No components to show.");
        } else {
            self.logger.info(&format!(
                "Monthly component list is now ready!! ({} record(s) from {} snapshot(s))",
                records.len(),
                files.len()
            ));
        }

        Ok((files.len(), records))
    }

    fn merge(&self, records: Vec<FlatComponent>) -> DedupedSet {
        self.logger.info("Filtering monthly components...");
        let components = Deduplicator::deduplicate(records);

        if components.is_empty() {
            self.logger
                .info("Merged component list is empty; the payload will carry no components.");
        } else {
            self.logger.info(&format!(
                "Kept {} distinct component(s)",
                components.len()
            ));
        }
        components
    }
}
