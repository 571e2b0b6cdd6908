use crate::ports::outbound::SnapshotReader;
use crate::shared::error::EinvError;
use crate::shared::security::{inspect_entry, validate_file_size, EntryKind, MAX_SNAPSHOT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension a directory entry needs to be treated as a snapshot
const SNAPSHOT_EXTENSION: &str = "json";

/// FileSystemReader adapter for reading snapshots from a directory
///
/// Listing is sorted by file name so that a given directory is always
/// processed in the same order.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file after checking it is a regular file within the size limit.
    /// Symbolic links are rejected.
    fn safe_read_file(&self, path: &Path) -> Result<Vec<u8>> {
        match inspect_entry(path)? {
            EntryKind::RegularFile { size } => validate_file_size(size, path, MAX_SNAPSHOT_SIZE)?,
            EntryKind::Symlink => anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            ),
            EntryKind::Directory | EntryKind::Other => {
                anyhow::bail!("{} is not a regular file", path.display())
            }
        }

        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
    }
}

impl SnapshotReader for FileSystemReader {
    fn list_snapshot_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let source_error = |details: String| EinvError::SourceRead {
            path: directory.to_path_buf(),
            details,
        };

        let entries = fs::read_dir(directory).map_err(|e| source_error(e.to_string()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| source_error(e.to_string()))?;
            let path = entry.path();

            let is_json = path
                .extension()
                .is_some_and(|ext| ext == SNAPSHOT_EXTENSION);
            if !is_json {
                continue;
            }

            // Symlinks stay listed so that reading them is rejected loudly
            let file_type = entry.file_type().map_err(|e| source_error(e.to_string()))?;
            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    fn read_snapshot_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.safe_read_file(path).map_err(|e| {
            EinvError::SourceRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
