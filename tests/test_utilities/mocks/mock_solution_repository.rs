use einv_sol::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SolutionRepository recording every call
#[derive(Clone)]
pub struct MockSolutionRepository {
    pub create_status: u16,
    pub export_body: Vec<u8>,
    pub fail_create: bool,
    pub fail_export: bool,
    pub created_payloads: Arc<Mutex<Vec<Vec<u8>>>>,
    pub exported_ids: Arc<Mutex<Vec<String>>>,
}

impl MockSolutionRepository {
    pub fn new(create_status: u16) -> Self {
        Self {
            create_status,
            export_body: br#"{"exported": true}"#.to_vec(),
            fail_create: false,
            fail_export: false,
            created_payloads: Arc::new(Mutex::new(Vec::new())),
            exported_ids: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_export_body(mut self, body: &[u8]) -> Self {
        self.export_body = body.to_vec();
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_export(mut self) -> Self {
        self.fail_export = true;
        self
    }

    pub fn created_payloads(&self) -> Vec<Vec<u8>> {
        self.created_payloads.lock().unwrap().clone()
    }

    pub fn exported_ids(&self) -> Vec<String> {
        self.exported_ids.lock().unwrap().clone()
    }
}

impl SolutionRepository for MockSolutionRepository {
    fn create_solution(&self, payload: &[u8]) -> Result<u16> {
        self.created_payloads.lock().unwrap().push(payload.to_vec());
        if self.fail_create {
            anyhow::bail!("Mock create failure");
        }
        Ok(self.create_status)
    }

    fn export_solution(&self, solution_id: &SolutionId) -> Result<Vec<u8>> {
        self.exported_ids
            .lock()
            .unwrap()
            .push(solution_id.as_str().to_string());
        if self.fail_export {
            anyhow::bail!("Mock export failure");
        }
        Ok(self.export_body.clone())
    }
}
