/// Logging adapters
mod dual_run_logger;

pub use dual_run_logger::{DualRunLogger, DEFAULT_LOG_FILE};
