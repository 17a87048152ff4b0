use license_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ActionLogger for testing that captures messages with their severity
#[derive(Default, Clone)]
pub struct MockActionLogger {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockActionLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Whether a message with the given severity prefix contains `needle`
    pub fn has(&self, severity: &str, needle: &str) -> bool {
        let prefix = format!("{}: ", severity);
        self.get_messages()
            .iter()
            .any(|m| m.starts_with(&prefix) && m.contains(needle))
    }

    fn push(&self, severity: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("{}: {}", severity, message));
    }
}

impl ActionLogger for MockActionLogger {
    fn debug(&self, message: &str) {
        self.push("debug", message);
    }

    fn info(&self, message: &str) {
        self.push("info", message);
    }

    fn warning(&self, message: &str) {
        self.push("warning", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }

    fn start_group(&self, title: &str) {
        self.push("group", title);
    }

    fn end_group(&self) {
        self.push("endgroup", "");
    }
}
