use async_trait::async_trait;
use license_audit::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock DedupGate for testing with a fixed set of already reported dependencies
#[derive(Default, Clone)]
pub struct MockDedupGate {
    reported: HashSet<String>,
    pub queried: Arc<Mutex<Vec<String>>>,
}

impl MockDedupGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reported(mut self, name: &str) -> Self {
        self.reported.insert(name.to_string());
        self
    }

    pub fn get_queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl DedupGate for MockDedupGate {
    async fn already_reported(&self, dependency_name: &str) -> Result<bool> {
        self.queried
            .lock()
            .unwrap()
            .push(dependency_name.to_string());
        Ok(self.reported.contains(dependency_name))
    }
}
