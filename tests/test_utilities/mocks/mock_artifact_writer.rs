use einv_sol::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock ArtifactWriter keeping written files in memory
#[derive(Default, Clone)]
pub struct MockArtifactWriter {
    pub files: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl MockArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn content_of(&self, name: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .find(|(file, _)| file == name)
            .map(|(_, content)| content.clone())
    }
}

impl ArtifactWriter for MockArtifactWriter {
    fn write_artifact(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        self.files
            .lock()
            .unwrap()
            .push((file_name.to_string(), content.to_vec()));
        Ok(PathBuf::from("/mock/out").join(file_name))
    }
}
