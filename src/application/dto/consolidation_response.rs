use crate::consolidation::domain::{Payload, SolutionId};
use crate::consolidation::services::DedupedSet;
use std::path::PathBuf;

/// ConsolidationResponse - Output of the consolidation use case
///
/// Carries the serialized payload so that the publish step submits exactly
/// the bytes that were written to disk.
#[derive(Debug, Clone)]
pub struct ConsolidationResponse {
    /// Number of snapshot files loaded
    pub snapshot_count: usize,
    /// Number of component records before deduplication
    pub record_count: usize,
    /// Merged components
    pub components: DedupedSet,
    /// Identifier the new solution is created under
    pub solution_id: SolutionId,
    pub payload: Payload,
    pub payload_bytes: Vec<u8>,
    /// Where `payload.json` was written
    pub payload_path: PathBuf,
}
