use crate::consolidation::domain::payload::null_as_empty;
use crate::consolidation::domain::{ComponentRef, Snapshot};
use crate::shared::error::EinvError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Top-level key holding the solution inside an export document
pub const EXPORTED_SOLUTION_KEY: &str = "ExportedSolution";

#[derive(Debug, Deserialize)]
struct ExportedSolution {
    #[serde(rename = "SolutionID", alias = "solutionID")]
    solution_id: String,
    #[serde(rename = "CreatedTime", alias = "createdTime")]
    created_time: DateTime<Utc>,
    #[serde(
        rename = "ExportComponents",
        alias = "exportComponents",
        default,
        deserialize_with = "null_as_empty"
    )]
    export_components: Vec<ExportComponent>,
}

#[derive(Debug, Deserialize)]
struct ExportComponent {
    #[serde(rename = "ComponentType", alias = "componentType")]
    component_type: String,
    #[serde(rename = "ComponentID", alias = "componentID")]
    component_id: String,
}

/// SnapshotParser turns one export document into a [`Snapshot`]
///
/// Decoding happens in two stages: the bytes are first read into a generic
/// JSON tree to locate the `ExportedSolution` subtree, and only that subtree
/// is then projected onto the typed shape. Everything else in the export
/// (roles, lists, business objects, ...) is ignored.
pub struct SnapshotParser;

impl SnapshotParser {
    /// Parses an export document
    ///
    /// # Arguments
    /// * `bytes` - Raw file content
    /// * `source` - Where the bytes came from, used in error messages
    ///
    /// # Errors
    /// Returns [`EinvError::Parse`] when the bytes are not JSON, when the
    /// `ExportedSolution` object is missing, or when a required field is
    /// absent or mistyped.
    pub fn parse(bytes: &[u8], source: &Path) -> Result<Snapshot> {
        let document: Value = serde_json::from_slice(bytes)
            .map_err(|e| parse_error(source, format!("Malformed JSON: {}", e)))?;

        let subtree = match document {
            Value::Object(mut root) => root.remove(EXPORTED_SOLUTION_KEY),
            _ => None,
        };

        let subtree = match subtree {
            Some(value @ Value::Object(_)) => value,
            Some(_) => {
                return Err(parse_error(
                    source,
                    format!("\"{}\" is not a JSON object", EXPORTED_SOLUTION_KEY),
                ))
            }
            None => {
                return Err(parse_error(
                    source,
                    format!("Missing top-level \"{}\" object", EXPORTED_SOLUTION_KEY),
                ))
            }
        };

        let exported: ExportedSolution = serde_json::from_value(subtree)
            .map_err(|e| parse_error(source, e.to_string()))?;

        let components = exported
            .export_components
            .into_iter()
            .map(|c| ComponentRef::new(c.component_type, c.component_id))
            .collect();

        Ok(Snapshot::new(
            exported.solution_id,
            exported.created_time,
            components,
        ))
    }
}

fn parse_error(source: &Path, details: String) -> anyhow::Error {
    EinvError::Parse {
        path: source.to_path_buf(),
        details,
    }
    .into()
}
