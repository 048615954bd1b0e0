//! Pattern-based query classification.
//!
//! A fixed table maps each query intent to the keywords that signal it.
//! Classification walks the table in declaration order and collects every
//! intent whose keywords occur in the query, so the result order is table
//! order, not match order.

use wildscribe_core::QueryType;

/// One row of the intent table.
pub struct IntentPattern {
    pub query_type: QueryType,
    pub keywords: &'static [&'static str],
}

/// The fixed intent table. Order matters: it defines classification order
/// and, downstream, task-plan order.
pub const INTENT_PATTERNS: &[IntentPattern] = &[
    IntentPattern {
        query_type: QueryType::LatestNews,
        keywords: &["latest", "recent", "new", "updates", "news"],
    },
    IntentPattern {
        query_type: QueryType::Historical,
        keywords: &["history", "historical", "past", "evolution", "timeline"],
    },
    IntentPattern {
        query_type: QueryType::Statistics,
        keywords: &["statistics", "numbers", "data", "figures", "count"],
    },
    IntentPattern {
        query_type: QueryType::CausesEffects,
        keywords: &["causes", "effects", "impact", "influence", "affect"],
    },
    IntentPattern {
        query_type: QueryType::Solutions,
        keywords: &["solutions", "measures", "steps", "actions", "how to", "prevent"],
    },
    IntentPattern {
        query_type: QueryType::Comparison,
        keywords: &["compare", "difference", "versus", "vs", "better"],
    },
    IntentPattern {
        query_type: QueryType::Definition,
        keywords: &["what is", "define", "meaning", "explain", "description"],
    },
    IntentPattern {
        query_type: QueryType::Location,
        keywords: &["where", "location", "place", "area", "region", "habitat"],
    },
    IntentPattern {
        query_type: QueryType::Process,
        keywords: &["how does", "process", "mechanism", "way", "method"],
    },
    IntentPattern {
        query_type: QueryType::Status,
        keywords: &["status", "condition", "state", "situation", "current"],
    },
];

/// Classify a query into its matched intents.
///
/// Matching is case-insensitive substring search. A query matching nothing
/// degrades to exactly `[General]`, so the result is never empty.
pub fn classify_query(query: &str) -> Vec<QueryType> {
    let lowered = query.to_lowercase();

    let matched: Vec<QueryType> = INTENT_PATTERNS
        .iter()
        .filter(|pattern| pattern.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|pattern| pattern.query_type)
        .collect();

    if matched.is_empty() {
        vec![QueryType::General]
    } else {
        matched
    }
}
