/// Mock implementations for testing
mod mock_artifact_writer;
mod mock_run_logger;
mod mock_snapshot_reader;
mod mock_solution_repository;

pub use mock_artifact_writer::MockArtifactWriter;
pub use mock_run_logger::MockRunLogger;
pub use mock_snapshot_reader::MockSnapshotReader;
pub use mock_solution_repository::MockSolutionRepository;
