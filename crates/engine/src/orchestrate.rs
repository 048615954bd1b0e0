//! Generation orchestration — resolve a plan into per-task completions.
//!
//! This is the only component that performs network I/O. Every planned task
//! resolves to *some* string: generated text, the no-answer sentinel, or the
//! hard-failure string. Nothing escapes the per-task boundary.
//!
//! The retry/fallback cascade is data-driven: a `ModelChain` lists the
//! primary endpoint and its ordered fallbacks, and one generic attempt
//! routine walks it. Adding or removing a tier is a configuration change.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, error, info, warn};
use wildscribe_core::{
    CompletionError, GenerationParams, GenerationPlan, TaskResults, TaskTemplate, TextCompletion,
};

/// Returned when generation produced no usable text.
pub const NO_ANSWER_SENTINEL: &str = "No answer generated. Try rephrasing your question.";

/// Returned when the generation backend failed outright.
pub const GENERATION_FAILED: &str = "Error generating response from AI model.";

/// Fixed persona prefix for every prompt.
pub const PERSONA_PREAMBLE: &str = "You are an AI assistant trained in advanced scientific \
research, specializing in wildlife, biodiversity, and conservation science in India. Provide \
well-structured, evidence-based answers in a formal, scientific tone that remains accessible \
to an educated audience. Avoid vague statements and unsupported claims; when uncertainty \
exists, state the limitations of the available data.\n\n";

/// The ordered model tier: one primary endpoint, then smaller fallbacks
/// attempted (in order) when the primary reports resource exhaustion.
#[derive(Debug, Clone)]
pub struct ModelChain {
    pub primary: String,
    pub fallbacks: Vec<String>,
}

impl ModelChain {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallbacks: Vec::new(),
        }
    }

    /// Append a fallback tier.
    pub fn with_fallback(mut self, model: impl Into<String>) -> Self {
        self.fallbacks.push(model.into());
        self
    }
}

/// Retry behavior for the primary endpoint.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts against the primary model per task.
    pub retries: u32,

    /// Pause between attempts. Part of the policy's contract: retries of a
    /// loading model must stay spaced out.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            delay: Duration::from_secs(5),
        }
    }
}

/// Resolves a `GenerationPlan` plus a context string into `TaskResults`.
pub struct GenerationOrchestrator {
    client: Arc<dyn TextCompletion>,
    models: ModelChain,
    params: GenerationParams,
    policy: RetryPolicy,
}

impl GenerationOrchestrator {
    pub fn new(
        client: Arc<dyn TextCompletion>,
        models: ModelChain,
        params: GenerationParams,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            client,
            models,
            params,
            policy,
        }
    }

    /// Resolve every task in the plan.
    ///
    /// Tasks are independent and fan out concurrently; the retry/fallback
    /// chain within one task stays strictly ordered. Results come back in
    /// plan order.
    pub async fn run(&self, plan: &GenerationPlan, query: &str, context: &str) -> TaskResults {
        let task_futures = plan.iter().map(|template| {
            let prompt = self.build_prompt(template, query, context);
            async move {
                let text = self.resolve_task(&template.task, &prompt).await;
                (template.task.clone(), text)
            }
        });

        let mut results = TaskResults::new();
        for (task, text) in join_all(task_futures).await {
            results.insert(task, text);
        }
        results
    }

    /// Assemble the full prompt: persona, task instruction, extracted context.
    fn build_prompt(&self, template: &TaskTemplate, query: &str, context: &str) -> String {
        format!(
            "{PERSONA_PREAMBLE}{}\n\nContext: {}",
            template.render(query),
            context
        )
    }

    /// Run the retry/fallback policy for one task. Total: always returns a
    /// string, never an error.
    async fn resolve_task(&self, task: &str, prompt: &str) -> String {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self
                .client
                .generate(&self.models.primary, prompt, &self.params)
                .await
            {
                Ok(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        debug!(task, attempt, "completion accepted");
                        return trimmed.to_string();
                    }
                    if attempt >= self.policy.retries {
                        warn!(task, attempts = attempt, "empty completion, giving up");
                        return NO_ANSWER_SENTINEL.to_string();
                    }
                    warn!(task, attempt, "empty completion, retrying");
                    tokio::time::sleep(self.policy.delay).await;
                }
                Err(CompletionError::TransientUnavailable(model)) => {
                    if attempt >= self.policy.retries {
                        warn!(task, model = %model, attempts = attempt, "model still loading, giving up");
                        return GENERATION_FAILED.to_string();
                    }
                    info!(
                        task,
                        model = %model,
                        attempt,
                        delay_secs = self.policy.delay.as_secs(),
                        "model loading, retrying"
                    );
                    tokio::time::sleep(self.policy.delay).await;
                }
                Err(CompletionError::ResourceExhausted(model)) => {
                    warn!(task, model = %model, "model out of capacity, falling back");
                    return self.resolve_with_fallbacks(task, prompt).await;
                }
                Err(e) => {
                    error!(task, error = %e, "completion failed");
                    return GENERATION_FAILED.to_string();
                }
            }
        }
    }

    /// Walk the fallback tiers in order with the same prompt. First
    /// non-empty success wins; an exhausted chain yields the sentinel.
    async fn resolve_with_fallbacks(&self, task: &str, prompt: &str) -> String {
        for (i, model) in self.models.fallbacks.iter().enumerate() {
            info!(
                task,
                model = %model,
                tier = i + 1,
                total = self.models.fallbacks.len(),
                "trying fallback model"
            );
            match self.client.generate(model, prompt, &self.params).await {
                Ok(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        info!(task, model = %model, "fallback completion accepted");
                        return trimmed.to_string();
                    }
                    warn!(task, model = %model, "fallback returned empty text, trying next");
                }
                Err(e) => {
                    warn!(task, model = %model, error = %e, "fallback failed, trying next");
                }
            }
        }
        warn!(task, "fallback chain exhausted");
        NO_ANSWER_SENTINEL.to_string()
    }
}
