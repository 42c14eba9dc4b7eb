use std::collections::VecDeque;
use std::sync::Mutex;

use super::types::LlmClient;
use super::LlmError;

/// Mock LLM client for testing.
///
/// Either answers every call with one fixed response, or replays a script of
/// results in call order. Every `(system, prompt)` pair is recorded.
pub struct MockLlmClient {
    fixed: Option<String>,
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockLlmClient {
    /// Always respond with `response`.
    pub fn new(response: &str) -> Self {
        Self {
            fixed: Some(response.to_string()),
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Respond with each result in turn. Calls past the end of the script
    /// fail with `LlmError::EmptyCompletion`.
    pub fn scripted(results: Vec<Result<String, LlmError>>) -> Self {
        Self {
            fixed: None,
            script: Mutex::new(results.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The `(system, prompt)` pairs received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl LlmClient for MockLlmClient {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((system.to_string(), prompt.to_string()));
        }

        if let Some(fixed) = &self.fixed {
            return Ok(fixed.clone());
        }

        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or(Err(LlmError::EmptyCompletion))
    }
}
