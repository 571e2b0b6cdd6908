/// Result alias used throughout the pipeline.
///
/// Errors are `anyhow::Error` so that typed [`EinvError`](super::error::EinvError)
/// values and added context travel together up to `main`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
