//! einv-sol - consolidate periodic e-invoice solution exports
//!
//! Reads every solution export snapshot in a directory, keeps the most
//! recently created version of each component, writes the resulting
//! create-solution payload and then drives the remote create-then-export
//! workflow.
//!
//! # Architecture
//!
//! - **Domain Layer** (`consolidation`): snapshot parsing, merge policy, payload shape
//! - **Application Layer** (`application`): use cases orchestrating the pipeline
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): file system, HTTP, console and log file
//! - **Shared** (`shared`): error types and file-safety checks
//!
//! # Example
//!
//! ```no_run
//! use einv_sol::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let logger = DualRunLogger::new(Path::new("einv_sol.log"))?;
//! let writer = FileSystemWriter::new(PathBuf::from("."));
//!
//! let use_case = ConsolidateSolutionsUseCase::new(
//!     FileSystemReader::new(),
//!     FixedSolutionId::new("EINV_2026_10".to_string()),
//!     &writer,
//!     &logger,
//!     PayloadBuilder::new("integration"),
//! );
//! let response = use_case.execute(ConsolidationRequest::new(PathBuf::from("Solutions")))?;
//!
//! let client = SolutionApiClient::new(ApiEndpoints::from_env()?)?;
//! let publish = PublishSolutionUseCase::new(client, &writer, &logger);
//! let result = publish.execute(&response.solution_id, &response.payload_bytes)?;
//! println!("exported: {}", result.exported);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod consolidation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{FixedSolutionId, PromptSolutionIdProvider};
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::logging::DualRunLogger;
    pub use crate::adapters::outbound::network::SolutionApiClient;
    pub use crate::application::dto::{ConsolidationRequest, ConsolidationResponse};
    pub use crate::application::use_cases::{
        ConsolidateSolutionsUseCase, PublishSolutionUseCase, PAYLOAD_FILE_NAME,
    };
    pub use crate::config::{ApiEndpoints, Settings, SettingsOverrides};
    pub use crate::consolidation::domain::{
        ComponentRef, FlatComponent, Payload, PayloadComponent, Snapshot, SolutionId,
        WorkflowResult, WorkflowStage,
    };
    pub use crate::consolidation::policies::ExportGate;
    pub use crate::consolidation::services::{
        ComponentFlattener, DedupedSet, Deduplicator, PayloadBuilder, SnapshotParser,
    };
    pub use crate::ports::outbound::{
        ArtifactWriter, RunLogger, SnapshotReader, SolutionIdProvider, SolutionRepository,
    };
    pub use crate::shared::Result;
}
