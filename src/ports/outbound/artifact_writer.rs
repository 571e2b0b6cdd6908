use crate::shared::Result;
use std::path::PathBuf;

/// ArtifactWriter port for persisting run artifacts
///
/// Artifacts are `payload.json` and the exported `<solution id>.json`.
pub trait ArtifactWriter {
    /// Writes `content` under `file_name` and returns the full path written
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn write_artifact(&self, file_name: &str, content: &[u8]) -> Result<PathBuf>;
}

impl<T: ArtifactWriter + ?Sized> ArtifactWriter for &T {
    fn write_artifact(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        (**self).write_artifact(file_name, content)
    }
}
