use std::fmt;

/// Stages of the create-then-export workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Idle,
    Creating,
    Exporting,
    Done,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowStage::Idle => write!(f, "idle"),
            WorkflowStage::Creating => write!(f, "create solution"),
            WorkflowStage::Exporting => write!(f, "export solution"),
            WorkflowStage::Done => write!(f, "done"),
        }
    }
}

/// Outcome of one workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowResult {
    pub solution_id: String,
    pub create_status_code: u16,
    pub exported: bool,
}

impl WorkflowResult {
    pub fn new(solution_id: String, create_status_code: u16, exported: bool) -> Self {
        Self {
            solution_id,
            create_status_code,
            exported,
        }
    }
}
