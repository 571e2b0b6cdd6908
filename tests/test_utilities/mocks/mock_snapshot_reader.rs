use einv_sol::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mock SnapshotReader serving in-memory files
pub struct MockSnapshotReader {
    pub files: BTreeMap<PathBuf, Vec<u8>>,
    pub should_fail: bool,
}

impl MockSnapshotReader {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            should_fail: false,
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files
            .insert(PathBuf::from(path), content.as_bytes().to_vec());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            files: BTreeMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockSnapshotReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotReader for MockSnapshotReader {
    fn list_snapshot_files(&self, _directory: &Path) -> Result<Vec<PathBuf>> {
        if self.should_fail {
            anyhow::bail!("Mock snapshot reader failure");
        }
        Ok(self.files.keys().cloned().collect())
    }

    fn read_snapshot_file(&self, path: &Path) -> Result<Vec<u8>> {
        match self.files.get(path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock file not found: {}", path.display()),
        }
    }
}
