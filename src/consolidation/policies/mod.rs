mod export_gate;

pub use export_gate::{ExportGate, CREATE_SUCCESS_STATUS};
