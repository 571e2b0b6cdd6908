use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SnapshotReader port for reading solution export files
///
/// This port abstracts the file system operations needed to find and read
/// the export snapshots that are consolidated.
pub trait SnapshotReader {
    /// Lists the snapshot files in a directory
    ///
    /// Only entries with a `.json` suffix are returned; directories and other
    /// files are skipped. The order is stable for a given directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed
    fn list_snapshot_files(&self, directory: &Path) -> Result<Vec<PathBuf>>;

    /// Reads the raw bytes of one snapshot file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read
    fn read_snapshot_file(&self, path: &Path) -> Result<Vec<u8>>;
}

impl<T: SnapshotReader + ?Sized> SnapshotReader for &T {
    fn list_snapshot_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        (**self).list_snapshot_files(directory)
    }

    fn read_snapshot_file(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read_snapshot_file(path)
    }
}
