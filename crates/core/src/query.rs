//! Query intent labels.

use serde::{Deserialize, Serialize};

/// A coarse intent label assigned to a user question via pattern matching.
///
/// A query may match several types at once; a query matching none is
/// classified as `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    General,
    LatestNews,
    Historical,
    Statistics,
    CausesEffects,
    Solutions,
    Comparison,
    Definition,
    Location,
    Process,
    Status,
}

impl QueryType {
    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::General => "general",
            QueryType::LatestNews => "latest_news",
            QueryType::Historical => "historical",
            QueryType::Statistics => "statistics",
            QueryType::CausesEffects => "causes_effects",
            QueryType::Solutions => "solutions",
            QueryType::Comparison => "comparison",
            QueryType::Definition => "definition",
            QueryType::Location => "location",
            QueryType::Process => "process",
            QueryType::Status => "status",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_name_matches_as_str() {
        let json = serde_json::to_string(&QueryType::CausesEffects).unwrap();
        assert_eq!(json, "\"causes_effects\"");
        assert_eq!(QueryType::CausesEffects.as_str(), "causes_effects");
    }
}
