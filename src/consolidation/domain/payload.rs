use crate::shared::error::EinvError;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of the remote "create solution" request
///
/// Field names follow the remote service's wire format exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(rename = "SolutionID")]
    pub solution_id: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "CreatedTime")]
    pub created_time: DateTime<Utc>,
    #[serde(rename = "ExportedTime")]
    pub exported_time: DateTime<Utc>,
    #[serde(rename = "LastUpdated")]
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "CreatedUser")]
    pub created_user: String,
    #[serde(rename = "UpdatedUser")]
    pub updated_user: String,
    #[serde(rename = "ExportedUser")]
    pub exported_user: String,
    #[serde(
        rename = "ExportComponents",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub export_components: Vec<PayloadComponent>,
}

/// A component reference as submitted; the merge timestamp is not sent
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PayloadComponent {
    #[serde(rename = "ComponentType")]
    pub component_type: String,
    #[serde(rename = "ComponentID")]
    pub component_id: String,
}

impl Payload {
    /// Serializes the payload into the bytes sent to the service and written
    /// to `payload.json`.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| {
            EinvError::Serialization {
                what: "create-solution payload".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            EinvError::Serialization {
                what: "create-solution payload (decode)".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Timestamp sent for times the service fills in itself.
///
/// Renders as `0001-01-01T00:00:00Z`.
pub fn unset_timestamp() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Treats a JSON `null` array as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn sample_payload() -> Payload {
        Payload {
            solution_id: "EINV_OCT".to_string(),
            description: "EINV_OCT_Monthly_revision".to_string(),
            status: "Created".to_string(),
            created_time: Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap(),
            exported_time: unset_timestamp(),
            last_updated: unset_timestamp(),
            created_user: "integration".to_string(),
            updated_user: String::new(),
            exported_user: String::new(),
            export_components: vec![
                PayloadComponent {
                    component_type: "CreditNote".to_string(),
                    component_id: "C2".to_string(),
                },
                PayloadComponent {
                    component_type: "Invoice".to_string(),
                    component_id: "C1".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_unset_timestamp_renders_as_year_one() {
        let json = serde_json::to_string(&unset_timestamp()).unwrap();
        assert_eq!(json, "\"0001-01-01T00:00:00Z\"");
    }

    #[test]
    fn test_payload_wire_field_names() {
        let bytes = sample_payload().to_json_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let object = value.as_object().unwrap();

        for field in [
            "SolutionID",
            "Description",
            "Status",
            "CreatedTime",
            "ExportedTime",
            "LastUpdated",
            "CreatedUser",
            "UpdatedUser",
            "ExportedUser",
            "ExportComponents",
        ] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object.len(), 10);

        let first = &value["ExportComponents"][0];
        assert_eq!(first["ComponentType"], "CreditNote");
        assert_eq!(first["ComponentID"], "C2");
        assert_eq!(first.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_payload_round_trip_preserves_components() {
        let original = sample_payload();
        let decoded = Payload::from_json_bytes(&original.to_json_bytes().unwrap()).unwrap();

        let before: HashSet<_> = original.export_components.iter().cloned().collect();
        let after: HashSet<_> = decoded.export_components.iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_payload_decode_accepts_null_components() {
        let json = r#"{
            "SolutionID": "S",
            "Description": "S_Monthly_revision",
            "Status": "Created",
            "CreatedTime": "2026-10-18T09:00:00Z",
            "ExportedTime": "0001-01-01T00:00:00Z",
            "LastUpdated": "0001-01-01T00:00:00Z",
            "CreatedUser": "u",
            "UpdatedUser": "",
            "ExportedUser": "",
            "ExportComponents": null
        }"#;
        let payload = Payload::from_json_bytes(json.as_bytes()).unwrap();
        assert!(payload.export_components.is_empty());
    }

    #[test]
    fn test_payload_decode_error_is_serialization_error() {
        let result = Payload::from_json_bytes(b"not json");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EinvError>(),
            Some(EinvError::Serialization { .. })
        ));
    }
}
