use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum snapshot size accepted by the loader (100 MB)
pub const MAX_SNAPSHOT_SIZE: u64 = 100 * 1024 * 1024;

/// What a directory entry turned out to be once inspected without following links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RegularFile { size: u64 },
    Directory,
    Symlink,
    Other,
}

/// Inspects a path with `symlink_metadata()` so that a link is reported as a
/// link rather than as whatever it points to.
pub fn inspect_entry(path: &Path) -> Result<EntryKind> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata for {}: {}", path.display(), e))?;

    let kind = if metadata.is_symlink() {
        EntryKind::Symlink
    } else if metadata.is_dir() {
        EntryKind::Directory
    } else if metadata.is_file() {
        EntryKind::RegularFile {
            size: metadata.len(),
        }
    } else {
        EntryKind::Other
    };
    Ok(kind)
}

/// Rejects an existing path that is a symbolic link.
///
/// A path that does not exist yet passes; `operation` only shapes the message.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        ),
        _ => Ok(()),
    }
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
