use crate::ports::outbound::ArtifactWriter;
use crate::shared::error::EinvError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing run artifacts into a directory
#[derive(Debug, Clone)]
pub struct FileSystemWriter {
    output_dir: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn persistence_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        EinvError::Persistence {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }

    /// Validates the destination before writing:
    /// - the output directory exists
    /// - the file name stays inside the output directory
    /// - an existing file at the destination is not a symlink
    fn validate_destination(&self, file_name: &str, path: &Path) -> Result<()> {
        if !self.output_dir.is_dir() && self.output_dir != Path::new("") {
            return Err(Self::persistence_error(
                path,
                format!(
                    "Output directory does not exist: {}",
                    self.output_dir.display()
                ),
            ));
        }

        if file_name.is_empty()
            || file_name.contains('/')
            || file_name.contains('\\')
            || file_name == ".."
        {
            return Err(Self::persistence_error(
                path,
                format!("Invalid artifact file name: {:?}", file_name),
            ));
        }

        reject_symlink(path, "write").map_err(|e| Self::persistence_error(path, e.to_string()))
    }
}

impl ArtifactWriter for FileSystemWriter {
    fn write_artifact(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        self.validate_destination(file_name, &path)?;

        fs::write(&path, content).map_err(|e| Self::persistence_error(&path, e.to_string()))?;

        Ok(path)
    }
}
