use super::snapshot::ComponentRef;
use chrono::{DateTime, Utc};

/// A component flattened out of its snapshot
///
/// Carries the owning snapshot's solution id and creation time so that
/// records from different snapshots can be merged.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatComponent {
    solution_id: String,
    created_time: DateTime<Utc>,
    key: ComponentRef,
}

impl FlatComponent {
    pub fn new(solution_id: impl Into<String>, created_time: DateTime<Utc>, key: ComponentRef) -> Self {
        Self {
            solution_id: solution_id.into(),
            created_time,
            key,
        }
    }

    pub fn solution_id(&self) -> &str {
        &self.solution_id
    }

    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    pub fn component_type(&self) -> &str {
        self.key.component_type()
    }

    pub fn component_id(&self) -> &str {
        self.key.component_id()
    }

    /// Deduplication key: `(component_type, component_id)`
    pub fn key(&self) -> &ComponentRef {
        &self.key
    }
}
