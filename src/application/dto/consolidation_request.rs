use std::path::PathBuf;

/// ConsolidationRequest - Input of the consolidation use case
#[derive(Debug, Clone)]
pub struct ConsolidationRequest {
    /// Directory holding the `.json` solution exports
    pub solutions_dir: PathBuf,
}

impl ConsolidationRequest {
    pub fn new(solutions_dir: PathBuf) -> Self {
        Self { solutions_dir }
    }
}
