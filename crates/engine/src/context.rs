//! Relevant-context extraction from chat history.
//!
//! Selects the history lines most similar to the current query and renders
//! them back in chronological order, tagged with their sender. Selection is
//! score-ordered; presentation is history-ordered.

use wildscribe_core::ChatMessage;

use crate::tokenize::{jaccard, tokenize};

/// Lines scoring at or below this are never included.
pub const SIMILARITY_THRESHOLD: f64 = 0.1;

/// At most this many lines are kept, highest-scoring first.
pub const MAX_CONTEXT_LINES: usize = 10;

/// A history line scored against the current query.
#[derive(Debug, Clone)]
struct ScoredLine<'a> {
    score: f64,
    sender: &'a str,
    line: &'a str,
}

/// Extract the chat-history lines most relevant to `query`.
///
/// Returns a newline-joined block of `"{sender}: {line}"` entries in their
/// original chronological order, with a blank line inserted whenever the
/// sender changes. Returns an empty string when the history is empty or no
/// line clears the similarity threshold.
pub fn extract_relevant_context(query: &str, history: &[ChatMessage]) -> String {
    if history.is_empty() {
        return String::new();
    }

    // Flatten every message into its non-blank lines, preserving message
    // order and line order within a message.
    let flat: Vec<(&str, &str)> = history
        .iter()
        .flat_map(|msg| {
            msg.text
                .lines()
                .map(move |line| (msg.sender.as_str(), line.trim()))
        })
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let query_tokens = tokenize(query);

    let mut selected: Vec<ScoredLine> = flat
        .iter()
        .map(|&(sender, line)| ScoredLine {
            score: jaccard(&query_tokens, &tokenize(line)),
            sender,
            line,
        })
        .filter(|scored| scored.score > SIMILARITY_THRESHOLD)
        .collect();

    selected.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    selected.truncate(MAX_CONTEXT_LINES);

    // Back to chronological position. The key is the first occurrence of the
    // line's text in the flattened history, so exact-duplicate lines share a
    // key and may swap. Accepted approximation.
    selected.sort_by_key(|scored| {
        flat.iter()
            .position(|&(_, line)| line == scored.line)
            .unwrap_or(usize::MAX)
    });

    let mut parts: Vec<String> = Vec::with_capacity(selected.len());
    let mut last_sender: Option<&str> = None;
    for scored in &selected {
        if last_sender.is_some_and(|prev| prev != scored.sender) {
            parts.push(String::new());
        }
        parts.push(format!("{}: {}", scored.sender, scored.line));
        last_sender = Some(scored.sender);
    }

    parts.join("\n")
}
