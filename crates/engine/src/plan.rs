//! Task planning: from matched intents to an ordered generation plan.
//!
//! The plan always opens with `summary` and always carries
//! `recommendations`; in between come the intent-specific tasks in
//! classifier order. `status` is force-added for news-flavored queries so a
//! "what's new" answer also reports where things stand today.

use wildscribe_core::{GenerationPlan, QueryType, TaskTemplate};

/// The fixed table of prompt templates, keyed by task name.
///
/// Built once at startup and shared read-only across requests.
pub struct PromptLibrary {
    templates: Vec<TaskTemplate>,
}

impl PromptLibrary {
    /// The built-in wildlife-research template set.
    pub fn builtin() -> Self {
        let templates = vec![
            TaskTemplate::new(
                "summary",
                "Provide a clear and concise summary addressing this question: {query}",
            ),
            TaskTemplate::new(
                "recent_developments",
                "Describe the latest developments, news, and updates relevant to: {query}",
            ),
            TaskTemplate::new(
                "historical_context",
                "Outline the historical trends and long-term evolution relevant to: {query}",
            ),
            TaskTemplate::new(
                "statistics",
                "Present the key statistics, figures, and published data available for: {query}",
            ),
            TaskTemplate::new(
                "causes_effects",
                "Explain the main causes and their ecological effects in relation to: {query}",
            ),
            TaskTemplate::new(
                "solutions",
                "List practical solutions, conservation measures, and concrete actions addressing: {query}",
            ),
            TaskTemplate::new(
                "comparison",
                "Compare the subjects raised in this question and highlight the key differences: {query}",
            ),
            TaskTemplate::new(
                "definition",
                "Define and explain the core concepts involved in: {query}",
            ),
            TaskTemplate::new(
                "distribution",
                "Describe the locations, regions, and habitats relevant to: {query}",
            ),
            TaskTemplate::new(
                "process",
                "Explain the underlying processes and mechanisms involved in: {query}",
            ),
            TaskTemplate::new(
                "status",
                "Summarize the current status and condition of the subject of: {query}",
            ),
            TaskTemplate::new(
                "recommendations",
                "Give actionable, evidence-based recommendations related to: {query}",
            ),
        ];
        Self { templates }
    }

    pub fn get(&self, task: &str) -> Option<&TaskTemplate> {
        self.templates.iter().find(|t| t.task == task)
    }

    /// The template for an intent's dedicated task, if it has one.
    /// `General` has none: its plan is just summary plus recommendations.
    pub fn for_query_type(&self, query_type: QueryType) -> Option<&TaskTemplate> {
        task_for_query_type(query_type).and_then(|task| self.get(task))
    }
}

/// The task key derived from an intent.
pub fn task_for_query_type(query_type: QueryType) -> Option<&'static str> {
    match query_type {
        QueryType::General => None,
        QueryType::LatestNews => Some("recent_developments"),
        QueryType::Historical => Some("historical_context"),
        QueryType::Statistics => Some("statistics"),
        QueryType::CausesEffects => Some("causes_effects"),
        QueryType::Solutions => Some("solutions"),
        QueryType::Comparison => Some("comparison"),
        QueryType::Definition => Some("definition"),
        QueryType::Location => Some("distribution"),
        QueryType::Process => Some("process"),
        QueryType::Status => Some("status"),
    }
}

/// Build the generation plan for a set of matched intents.
///
/// Rules, applied in order:
/// 1. `summary` always comes first.
/// 2. Each matched intent with a template appends it, in classifier order.
/// 3. A `latest_news` match without a planned `status` appends `status`.
/// 4. `recommendations` is appended if not yet present.
///
/// The plan itself rejects duplicate task keys, first occurrence wins.
pub fn build_plan(matched: &[QueryType], prompts: &PromptLibrary) -> GenerationPlan {
    let mut plan = GenerationPlan::new();

    if let Some(summary) = prompts.get("summary") {
        plan.push(summary.clone());
    }

    for &query_type in matched {
        if let Some(template) = prompts.for_query_type(query_type) {
            plan.push(template.clone());
        }
    }

    if matched.contains(&QueryType::LatestNews) && !plan.contains("status") {
        if let Some(status) = prompts.get("status") {
            plan.push(status.clone());
        }
    }

    if !plan.contains("recommendations") {
        if let Some(recommendations) = prompts.get("recommendations") {
            plan.push(recommendations.clone());
        }
    }

    plan
}
