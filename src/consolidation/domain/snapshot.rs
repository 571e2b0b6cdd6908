use chrono::{DateTime, Utc};

/// A component as listed inside a solution export
///
/// `(component_type, component_id)` is the logical identity of a component
/// across snapshots, so the type doubles as the deduplication key. Ordering
/// is by type, then id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentRef {
    component_type: String,
    component_id: String,
}

impl ComponentRef {
    pub fn new(component_type: impl Into<String>, component_id: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            component_id: component_id.into(),
        }
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn component_id(&self) -> &str {
        &self.component_id
    }
}

impl std::fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.component_type, self.component_id)
    }
}

/// One parsed solution export: who, when, and which components
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    solution_id: String,
    created_time: DateTime<Utc>,
    components: Vec<ComponentRef>,
}

impl Snapshot {
    pub fn new(
        solution_id: impl Into<String>,
        created_time: DateTime<Utc>,
        components: Vec<ComponentRef>,
    ) -> Self {
        Self {
            solution_id: solution_id.into(),
            created_time,
            components,
        }
    }

    pub fn solution_id(&self) -> &str {
        &self.solution_id
    }

    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }
}
