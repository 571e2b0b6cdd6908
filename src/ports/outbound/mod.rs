/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod artifact_writer;
pub mod run_logger;
pub mod snapshot_reader;
pub mod solution_id_provider;
pub mod solution_repository;

pub use artifact_writer::ArtifactWriter;
pub use run_logger::RunLogger;
pub use snapshot_reader::SnapshotReader;
pub use solution_id_provider::SolutionIdProvider;
pub use solution_repository::SolutionRepository;
