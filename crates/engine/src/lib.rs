//! # Wildscribe Engine
//!
//! The answer pipeline: a free-text question is decomposed into generation
//! tasks, each task obtains a completion from the external text-generation
//! capability, and the completions are assembled into one structured, headed
//! answer.
//!
//! # Flow
//!
//! 1. `context` — extract the chat-history lines most relevant to the query
//! 2. `classify` — match the query against the intent-pattern table
//! 3. `plan` — turn matched intents into an ordered, duplicate-free task plan
//! 4. `orchestrate` — resolve every task with retry/fallback against the
//!    model chain
//! 5. `assemble` — order, header, and join the per-task completions
//!
//! Steps 1 and 2 depend only on the raw query/history; everything else flows
//! forward. Only step 4 performs I/O.

pub mod assemble;
pub mod classify;
pub mod context;
pub mod orchestrate;
pub mod pipeline;
pub mod plan;
pub mod relevance;
pub mod tokenize;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use assemble::assemble_response;
pub use classify::classify_query;
pub use context::extract_relevant_context;
pub use orchestrate::{
    GenerationOrchestrator, ModelChain, RetryPolicy, GENERATION_FAILED, NO_ANSWER_SENTINEL,
};
pub use pipeline::ResearchPipeline;
pub use plan::{build_plan, PromptLibrary};
pub use relevance::is_query_relevant;
