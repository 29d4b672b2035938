// src/forms/submit.rs
use std::fmt::Debug;
use std::time::Duration;

/// Stand-in for the data backend: logs the submission and waits a fixed
/// delay. There is no failure path.
#[derive(Debug, Clone)]
pub struct SubmissionStub {
    delay: Duration,
}

impl SubmissionStub {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn submit<T: Debug>(&self, kind: &'static str, data: &T) {
        tracing::info!(kind, data = ?data, "form submitted");
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
