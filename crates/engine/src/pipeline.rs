//! The end-to-end answer pipeline.
//!
//! Wires the pure stages (context extraction, classification, planning,
//! assembly) around the orchestrator's generation calls. One instance is
//! built at startup and shared read-only across requests.

use std::sync::Arc;

use tracing::{debug, info};
use wildscribe_core::{ChatMessage, GenerationParams, TextCompletion};

use crate::assemble::assemble_response;
use crate::classify::classify_query;
use crate::context::extract_relevant_context;
use crate::orchestrate::{GenerationOrchestrator, ModelChain, RetryPolicy};
use crate::plan::{build_plan, PromptLibrary};

/// Answers free-text research questions with structured, headed text.
pub struct ResearchPipeline {
    prompts: PromptLibrary,
    orchestrator: GenerationOrchestrator,
}

impl ResearchPipeline {
    pub fn new(
        client: Arc<dyn TextCompletion>,
        models: ModelChain,
        params: GenerationParams,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            prompts: PromptLibrary::builtin(),
            orchestrator: GenerationOrchestrator::new(client, models, params, policy),
        }
    }

    /// Produce the structured answer for a query and its chat history.
    ///
    /// Never fails: degraded generation shows up as sentinel or error text
    /// inside the affected sections, not as an error here.
    pub async fn answer(&self, query: &str, history: &[ChatMessage]) -> String {
        let context = extract_relevant_context(query, history);
        let matched = classify_query(query);
        let plan = build_plan(&matched, &self.prompts);

        info!(
            intents = ?matched,
            tasks = plan.len(),
            context_lines = context.lines().count(),
            "answering query"
        );
        debug!(plan = ?plan.task_keys(), "generation plan");

        let results = self.orchestrator.run(&plan, query, &context).await;
        assemble_response(&results, &matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrate::NO_ANSWER_SENTINEL;
    use crate::test_helpers::FnCompletion;
    use wildscribe_core::CompletionError;

    fn pipeline(client: Arc<dyn TextCompletion>) -> ResearchPipeline {
        ResearchPipeline::new(
            client,
            ModelChain::new("primary").with_fallback("secondary"),
            GenerationParams::default(),
            RetryPolicy {
                retries: 3,
                delay: std::time::Duration::ZERO,
            },
        )
    }

    #[tokio::test]
    async fn answers_carry_all_planned_sections() {
        let client = Arc::new(FnCompletion::new(|_, _: &str| Ok("Section text.".into())));
        let answer = pipeline(client)
            .answer("What are the latest statistics on tiger poaching?", &[])
            .await;

        for header in [
            "Summary:",
            "Recent Developments:",
            "Statistics:",
            "Current Status:",
            "Recommendations:",
        ] {
            assert!(answer.contains(header), "missing header {header}");
        }
    }

    #[tokio::test]
    async fn relevant_history_reaches_the_prompt() {
        // Echo the prompt so the answer reveals what was sent.
        let client = Arc::new(FnCompletion::new(|_, prompt: &str| Ok(prompt.to_string())));
        let history = vec![
            ChatMessage::new("user", "tell me about tiger corridors in india"),
            ChatMessage::new("bot", "unrelated small talk about weekend plans"),
        ];
        let answer = pipeline(client)
            .answer("more on tiger corridors in india", &history)
            .await;

        assert!(answer.contains("user: tell me about tiger corridors in india"));
        assert!(!answer.contains("weekend plans"));
    }

    #[tokio::test]
    async fn generation_failures_stay_inside_their_section() {
        let client = Arc::new(FnCompletion::new(|_, prompt: &str| {
            if prompt.contains("recommendations") {
                Err(CompletionError::Network("down".into()))
            } else {
                Ok("Fine.".into())
            }
        }));
        let answer = pipeline(client).answer("pandas", &[]).await;

        assert!(answer.contains("Summary:\nFine."));
        assert!(answer.contains("Error generating response from AI model."));
    }

    #[tokio::test]
    async fn empty_generation_shows_the_sentinel() {
        let client = Arc::new(FnCompletion::new(|_, _: &str| Ok(String::new())));
        let answer = pipeline(client).answer("pandas", &[]).await;

        assert!(answer.contains(NO_ANSWER_SENTINEL));
    }
}
