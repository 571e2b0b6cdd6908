use einv_sol::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RunLogger that captures messages
#[derive(Default, Clone)]
pub struct MockRunLogger {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockRunLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.get_messages().iter().any(|m| m.contains(fragment))
    }
}

impl RunLogger for MockRunLogger {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Warning: {}", message));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }
}
