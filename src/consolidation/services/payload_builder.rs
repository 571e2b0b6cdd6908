use crate::consolidation::domain::payload::unset_timestamp;
use crate::consolidation::domain::{Payload, PayloadComponent, SolutionId};
use crate::consolidation::services::DedupedSet;
use chrono::{DateTime, Utc};

/// Appended to the solution id to form the description
pub const DESCRIPTION_SUFFIX: &str = "_Monthly_revision";

/// Status of a solution that has just been created
pub const CREATED_STATUS: &str = "Created";

/// PayloadBuilder shapes merged components into a create-solution payload
///
/// The submitting user is fixed per builder; the solution id is supplied per
/// build so that callers decide where it comes from.
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    created_user: String,
}

impl PayloadBuilder {
    pub fn new(created_user: impl Into<String>) -> Self {
        Self {
            created_user: created_user.into(),
        }
    }

    /// Builds the payload stamped with the current time
    pub fn build(&self, solution_id: &SolutionId, components: &DedupedSet) -> Payload {
        self.build_at(solution_id, components, Utc::now())
    }

    /// Builds the payload with an explicit creation time
    ///
    /// Components keep the set's order (type, then id) and lose their
    /// merge timestamps.
    pub fn build_at(
        &self,
        solution_id: &SolutionId,
        components: &DedupedSet,
        created_time: DateTime<Utc>,
    ) -> Payload {
        let export_components = components
            .iter()
            .map(|record| PayloadComponent {
                component_type: record.component_type().to_string(),
                component_id: record.component_id().to_string(),
            })
            .collect();

        Payload {
            solution_id: solution_id.as_str().to_string(),
            description: format!("{}{}", solution_id, DESCRIPTION_SUFFIX),
            status: CREATED_STATUS.to_string(),
            created_time,
            exported_time: unset_timestamp(),
            last_updated: unset_timestamp(),
            created_user: self.created_user.clone(),
            updated_user: String::new(),
            exported_user: String::new(),
            export_components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consolidation::domain::{ComponentRef, FlatComponent};
    use crate::consolidation::services::Deduplicator;
    use chrono::TimeZone;

    fn solution_id() -> SolutionId {
        SolutionId::new("EINV_OCT".to_string()).unwrap()
    }

    #[test]
    fn test_build_from_empty_set() {
        let builder = PayloadBuilder::new("integration");
        let payload = builder.build(&solution_id(), &DedupedSet::new());

        assert!(payload.export_components.is_empty());
        assert_eq!(payload.solution_id, "EINV_OCT");
        assert_eq!(payload.description, "EINV_OCT_Monthly_revision");
        assert_eq!(payload.status, "Created");
        assert_eq!(payload.created_user, "integration");
        assert!(payload.created_time > unset_timestamp());
    }

    #[test]
    fn test_build_projects_components_in_key_order() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let set = Deduplicator::deduplicate(vec![
            FlatComponent::new("S2", at, ComponentRef::new("Invoice", "C1")),
            FlatComponent::new("S2", at, ComponentRef::new("CreditNote", "C2")),
        ]);

        let payload = PayloadBuilder::new("integration").build_at(&solution_id(), &set, at);

        assert_eq!(payload.created_time, at);
        assert_eq!(
            payload.export_components,
            vec![
                PayloadComponent {
                    component_type: "CreditNote".to_string(),
                    component_id: "C2".to_string(),
                },
                PayloadComponent {
                    component_type: "Invoice".to_string(),
                    component_id: "C1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_build_leaves_service_fields_unset() {
        let payload = PayloadBuilder::new("u").build(&solution_id(), &DedupedSet::new());
        assert_eq!(payload.exported_time, unset_timestamp());
        assert_eq!(payload.last_updated, unset_timestamp());
        assert!(payload.updated_user.is_empty());
        assert!(payload.exported_user.is_empty());
    }
}
