#![allow(dead_code)]

pub mod http;
pub mod mocks;

/// Builds one solution export document
pub fn export_json(solution: &str, created: &str, components: &[(&str, &str)]) -> String {
    let components: Vec<String> = components
        .iter()
        .map(|(kind, id)| {
            format!(
                r#"{{"ComponentType": "{}", "ComponentID": "{}"}}"#,
                kind, id
            )
        })
        .collect();
    format!(
        r#"{{"ExportedSolution": {{"SolutionID": "{}", "CreatedTime": "{}", "ExportComponents": [{}]}}}}"#,
        solution,
        created,
        components.join(", ")
    )
}
