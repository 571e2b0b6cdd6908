pub mod component;
pub mod payload;
pub mod snapshot;
pub mod solution_id;
pub mod workflow;

pub use component::FlatComponent;
pub use payload::{Payload, PayloadComponent};
pub use snapshot::{ComponentRef, Snapshot};
pub use solution_id::SolutionId;
pub use workflow::{WorkflowResult, WorkflowStage};
