//! Test double that records every request and replays canned outputs.

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;

use super::{CompletionRequest, CompletionService};

pub struct StubCompletion {
    outputs: Vec<String>,
    fail_on_call: Option<usize>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletion {
    pub fn new(outputs: &[&str]) -> Self {
        Self {
            outputs: outputs.iter().map(|output| (*output).to_owned()).collect(),
            fail_on_call: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails the `call`-th request (1-based) and every one after it.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<String>> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        let call = requests.len();

        if self.fail_on_call.is_some_and(|fail_on| call >= fail_on) {
            bail!("stub failure on call {call}");
        }
        Ok(self.outputs.clone())
    }
}
