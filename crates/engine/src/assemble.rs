//! Response assembly — order, header, and join the per-task completions.
//!
//! The primary matched intent picks a section order; tasks the order does
//! not name trail behind in plan order. Empty sections are dropped rather
//! than rendered as bare headers.

use wildscribe_core::{QueryType, TaskResults};

/// Display header for a task key.
pub fn header_for_task(task: &str) -> &str {
    match task {
        "summary" => "Summary",
        "recent_developments" => "Recent Developments",
        "historical_context" => "Historical Context",
        "statistics" => "Statistics",
        "causes_effects" => "Causes and Effects",
        "solutions" => "Solutions",
        "comparison" => "Comparison",
        "definition" => "Definition",
        "distribution" => "Distribution and Habitat",
        "process" => "Process",
        "status" => "Current Status",
        "recommendations" => "Recommendations",
        other => other,
    }
}

/// Preferred section order per primary intent. Tasks not listed here are
/// appended afterwards in plan order.
fn section_order(primary: QueryType) -> &'static [&'static str] {
    match primary {
        QueryType::General => &["summary", "definition", "statistics", "recommendations"],
        QueryType::LatestNews => &[
            "summary",
            "recent_developments",
            "status",
            "statistics",
            "recommendations",
        ],
        QueryType::Historical => &[
            "summary",
            "historical_context",
            "statistics",
            "recommendations",
        ],
        QueryType::Statistics => &[
            "summary",
            "statistics",
            "recent_developments",
            "recommendations",
        ],
        QueryType::CausesEffects => &["summary", "causes_effects", "solutions", "recommendations"],
        QueryType::Solutions => &["summary", "solutions", "causes_effects", "recommendations"],
        QueryType::Comparison => &["summary", "comparison", "statistics", "recommendations"],
        QueryType::Definition => &["summary", "definition", "process", "recommendations"],
        QueryType::Location => &["summary", "distribution", "statistics", "recommendations"],
        QueryType::Process => &["summary", "process", "definition", "recommendations"],
        QueryType::Status => &["summary", "status", "statistics", "recommendations"],
    }
}

/// Assemble the final answer text.
///
/// Sections render as `"{header}:\n{content}"`, joined by one blank line.
/// Content that is empty after trimming is silently omitted.
pub fn assemble_response(results: &TaskResults, matched: &[QueryType]) -> String {
    let primary = matched.first().copied().unwrap_or(QueryType::General);
    let order = section_order(primary);

    let mut sections: Vec<String> = Vec::with_capacity(results.len());
    let mut emitted: Vec<&str> = Vec::with_capacity(results.len());

    for &task in order {
        if let Some(content) = results.get(task) {
            let content = content.trim();
            if !content.is_empty() {
                sections.push(format!("{}:\n{}", header_for_task(task), content));
                emitted.push(task);
            }
        }
    }

    for (task, content) in results.iter() {
        if emitted.contains(&task) {
            continue;
        }
        let content = content.trim();
        if !content.is_empty() {
            sections.push(format!("{}:\n{}", header_for_task(task), content));
        }
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(entries: &[(&str, &str)]) -> TaskResults {
        let mut r = TaskResults::new();
        for (task, text) in entries {
            r.insert(*task, *text);
        }
        r
    }

    #[test]
    fn orders_sections_by_primary_type() {
        let r = results(&[
            ("summary", "S"),
            ("recent_developments", "R"),
            ("statistics", "N"),
            ("status", "C"),
            ("recommendations", "A"),
        ]);
        let answer = assemble_response(&r, &[QueryType::LatestNews, QueryType::Statistics]);

        let order: Vec<usize> = [
            "Summary:",
            "Recent Developments:",
            "Current Status:",
            "Statistics:",
            "Recommendations:",
        ]
        .iter()
        .map(|h| answer.find(h).unwrap())
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let r = results(&[
            ("summary", "Here is the summary."),
            ("statistics", "   "),
            ("recommendations", ""),
        ]);
        let answer = assemble_response(&r, &[QueryType::Statistics]);

        assert!(answer.contains("Summary:"));
        assert!(!answer.contains("Statistics:"));
        assert!(!answer.contains("Recommendations:"));
    }

    #[test]
    fn unknown_primary_tasks_trail_in_result_order() {
        // comparison is not in the Location order; it must come last.
        let r = results(&[
            ("summary", "S"),
            ("comparison", "X"),
            ("distribution", "D"),
        ]);
        let answer = assemble_response(&r, &[QueryType::Location]);

        let d = answer.find("Distribution and Habitat:").unwrap();
        let c = answer.find("Comparison:").unwrap();
        assert!(d < c);
    }

    #[test]
    fn defaults_to_general_order_when_nothing_matched() {
        let r = results(&[("recommendations", "A"), ("summary", "S")]);
        let answer = assemble_response(&r, &[]);

        let s = answer.find("Summary:").unwrap();
        let a = answer.find("Recommendations:").unwrap();
        assert!(s < a);
    }

    #[test]
    fn sections_are_separated_by_blank_lines() {
        let r = results(&[("summary", "S"), ("recommendations", "A")]);
        let answer = assemble_response(&r, &[QueryType::General]);
        assert_eq!(answer, "Summary:\nS\n\nRecommendations:\nA");
    }

    #[test]
    fn all_empty_results_yield_empty_answer() {
        let r = results(&[("summary", ""), ("recommendations", "  ")]);
        assert_eq!(assemble_response(&r, &[QueryType::General]), "");
    }

    #[test]
    fn content_is_trimmed_in_output() {
        let r = results(&[("summary", "  padded  ")]);
        assert_eq!(
            assemble_response(&r, &[QueryType::General]),
            "Summary:\npadded"
        );
    }
}
