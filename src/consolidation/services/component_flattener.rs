use crate::consolidation::domain::{FlatComponent, Snapshot};

/// ComponentFlattener projects snapshots into flat component records
pub struct ComponentFlattener;

impl ComponentFlattener {
    /// One record per component, stamped with the snapshot's solution id and
    /// creation time. A snapshot without components yields no records.
    pub fn flatten(snapshot: &Snapshot) -> Vec<FlatComponent> {
        snapshot
            .components()
            .iter()
            .map(|component| {
                FlatComponent::new(
                    snapshot.solution_id(),
                    snapshot.created_time(),
                    component.clone(),
                )
            })
            .collect()
    }

    /// Concatenates the records of all snapshots, preserving snapshot order
    pub fn flatten_all<'a, I>(snapshots: I) -> Vec<FlatComponent>
    where
        I: IntoIterator<Item = &'a Snapshot>,
    {
        snapshots.into_iter().flat_map(Self::flatten).collect()
    }
}
