use async_trait::async_trait;
use license_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock CheckRunFactory for testing that records every check run call
///
/// All handles created by one factory share the same call log.
#[derive(Default, Clone)]
pub struct MockCheckRunFactory {
    fail_start: bool,
    fail_finish: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub outputs: Arc<Mutex<Vec<(CheckConclusion, CheckOutput)>>>,
}

impl MockCheckRunFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `start` fail, as the platform does for a read-only token
    pub fn with_start_failure(mut self) -> Self {
        self.fail_start = true;
        self
    }

    pub fn with_finish_failure(mut self) -> Self {
        self.fail_finish = true;
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get_outputs(&self) -> Vec<(CheckConclusion, CheckOutput)> {
        self.outputs.lock().unwrap().clone()
    }
}

impl CheckRunFactory for MockCheckRunFactory {
    type Handle = MockCheckRun;

    fn create_check(&self, name: &str) -> MockCheckRun {
        self.calls.lock().unwrap().push(format!("create {}", name));
        MockCheckRun {
            factory: self.clone(),
        }
    }
}

/// Check run handle produced by MockCheckRunFactory
pub struct MockCheckRun {
    factory: MockCheckRunFactory,
}

impl MockCheckRun {
    fn record(&self, call: String) {
        self.factory.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CheckRunHandle for MockCheckRun {
    async fn start(&mut self, status: CheckStatus) -> Result<()> {
        self.record(format!("start {}", status.as_str()));
        if self.factory.fail_start {
            anyhow::bail!("Resource not accessible by integration");
        }
        Ok(())
    }

    async fn finish(&mut self, conclusion: CheckConclusion, output: CheckOutput) -> Result<()> {
        self.record(format!("finish {}", conclusion.as_str()));
        if self.factory.fail_finish {
            anyhow::bail!("Mock check completion failure");
        }
        self.factory
            .outputs
            .lock()
            .unwrap()
            .push((conclusion, output));
        Ok(())
    }

    async fn cancel(&mut self) -> Result<()> {
        self.record("cancel".to_string());
        Ok(())
    }
}
