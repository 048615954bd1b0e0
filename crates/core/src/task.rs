//! Generation task value objects.
//!
//! A `TaskTemplate` describes one generation unit: a unique task key and a
//! prompt format with a `{query}` placeholder. A `GenerationPlan` is the
//! ordered, duplicate-free sequence of templates selected for a query, and
//! `TaskResults` holds the generated text per task in plan order.
//!
//! Both collections are Vec-backed on purpose: task order is part of the
//! contract and must never depend on hash iteration order.

use serde::{Deserialize, Serialize};

/// One planned generation unit, producing one section of the final answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Unique task key, e.g. "summary" or "recent_developments".
    pub task: String,

    /// Prompt text containing a `{query}` placeholder.
    pub prompt_format: String,
}

impl TaskTemplate {
    pub fn new(task: impl Into<String>, prompt_format: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            prompt_format: prompt_format.into(),
        }
    }

    /// Substitute the user query into the prompt format.
    pub fn render(&self, query: &str) -> String {
        self.prompt_format.replace("{query}", query)
    }
}

/// An ordered, duplicate-free sequence of task templates.
///
/// Insertion order is preserved; a second push of the same task key is
/// ignored (first occurrence wins).
#[derive(Debug, Clone, Default)]
pub struct GenerationPlan {
    tasks: Vec<TaskTemplate>,
}

impl GenerationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a template unless its task key is already planned.
    pub fn push(&mut self, template: TaskTemplate) {
        if !self.contains(&template.task) {
            self.tasks.push(template);
        }
    }

    pub fn contains(&self, task: &str) -> bool {
        self.tasks.iter().any(|t| t.task == task)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskTemplate> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The planned task keys, in plan order.
    pub fn task_keys(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.task.as_str()).collect()
    }
}

/// Generated text per task key, in the order the tasks were resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskResults {
    entries: Vec<(String, String)>,
}

impl TaskResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a task's generated text. A repeated key overwrites in place,
    /// keeping the original position.
    pub fn insert(&mut self, task: impl Into<String>, text: impl Into<String>) {
        let task = task.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(k, _)| *k == task) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((task, text)),
        }
    }

    pub fn get(&self, task: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == task)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_query() {
        let tpl = TaskTemplate::new("summary", "Summarize: {query}");
        assert_eq!(tpl.render("tiger poaching"), "Summarize: tiger poaching");
    }

    #[test]
    fn plan_rejects_duplicate_keys() {
        let mut plan = GenerationPlan::new();
        plan.push(TaskTemplate::new("summary", "a"));
        plan.push(TaskTemplate::new("status", "b"));
        plan.push(TaskTemplate::new("summary", "c"));

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.task_keys(), vec!["summary", "status"]);
        // First occurrence wins
        assert_eq!(plan.iter().next().unwrap().prompt_format, "a");
    }

    #[test]
    fn results_preserve_insertion_order() {
        let mut results = TaskResults::new();
        results.insert("summary", "s");
        results.insert("status", "st");
        results.insert("recommendations", "r");

        let keys: Vec<&str> = results.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["summary", "status", "recommendations"]);
    }

    #[test]
    fn results_overwrite_keeps_position() {
        let mut results = TaskResults::new();
        results.insert("a", "1");
        results.insert("b", "2");
        results.insert("a", "3");

        assert_eq!(results.len(), 2);
        assert_eq!(results.get("a"), Some("3"));
        assert_eq!(results.iter().next().unwrap(), ("a", "3"));
    }
}
