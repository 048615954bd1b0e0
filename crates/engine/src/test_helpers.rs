//! Shared test helpers for pipeline tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use wildscribe_core::{CompletionError, GenerationParams, TextCompletion};

/// A mock completion client that returns a scripted sequence of outcomes.
///
/// Each call to `generate` pops the next outcome from the queue and records
/// the `(model, prompt)` pair. Panics if more calls are made than outcomes
/// provided.
pub struct ScriptedCompletion {
    script: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedCompletion {
    pub fn new(script: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The `(model, prompt)` pairs seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TextCompletion for ScriptedCompletion {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, CompletionError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedCompletion: no more outcomes scripted"))
    }
}

/// A mock completion client backed by a closure over `(model, prompt)`.
///
/// Stateless; useful when several tasks run concurrently and a shared
/// queue would interleave unpredictably.
pub struct FnCompletion<F> {
    f: F,
}

impl<F> FnCompletion<F>
where
    F: Fn(&str, &str) -> Result<String, CompletionError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait::async_trait]
impl<F> TextCompletion for FnCompletion<F>
where
    F: Fn(&str, &str) -> Result<String, CompletionError> + Send + Sync,
{
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, CompletionError> {
        (self.f)(model, prompt)
    }
}
