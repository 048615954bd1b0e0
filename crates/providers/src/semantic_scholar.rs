//! Semantic Scholar paper search.
//!
//! Best-effort enrichment: failures yield an empty list, never an error.

use serde::{Deserialize, Serialize};
use tracing::warn;

const SEMANTIC_SCHOLAR_BASE_URL: &str = "https://api.semanticscholar.org/graph/v1";

/// The fields requested per paper.
const PAPER_FIELDS: &str = "title,abstract,url";

/// A paper attached to a relevant answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperSummary {
    pub title: Option<String>,

    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    pub url: Option<String>,
}

pub struct SemanticScholarClient {
    base_url: String,
    limit: u32,
    client: reqwest::Client,
}

impl SemanticScholarClient {
    pub fn new(limit: u32) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: SEMANTIC_SCHOLAR_BASE_URL.to_string(),
            limit,
            client,
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Search papers matching the query.
    pub async fn search_papers(&self, query: &str) -> Vec<PaperSummary> {
        let url = format!("{}/paper/search", self.base_url);
        let limit = self.limit.to_string();
        let request = self.client.get(&url).query(&[
            ("query", query),
            ("limit", limit.as_str()),
            ("fields", PAPER_FIELDS),
        ]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Semantic Scholar request failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(
                status = response.status().as_u16(),
                "Semantic Scholar returned error"
            );
            return Vec::new();
        }

        match response.json::<SearchResponse>().await {
            Ok(parsed) => parsed.data,
            Err(e) => {
                warn!(error = %e, "Failed to parse Semantic Scholar response");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<PaperSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_papers() {
        let body = r#"{"total": 2, "data": [
            {"title": "Tiger ecology", "abstract": "A study.", "url": "https://example.com/1"},
            {"title": "Leopard ranges", "abstract": null, "url": null}
        ]}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].title.as_deref(), Some("Tiger ecology"));
        assert_eq!(parsed.data[0].abstract_text.as_deref(), Some("A study."));
        assert!(parsed.data[1].abstract_text.is_none());
    }

    #[test]
    fn paper_serializes_with_abstract_key() {
        let paper = PaperSummary {
            title: Some("T".into()),
            abstract_text: Some("A".into()),
            url: None,
        };
        let json = serde_json::to_string(&paper).unwrap();
        assert!(json.contains("\"abstract\":\"A\""));
    }

    #[test]
    fn tolerates_missing_data_key() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(parsed.data.is_empty());
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_empty_list() {
        let client = SemanticScholarClient::new(3).with_base_url("http://127.0.0.1:1");
        let papers = client.search_papers("tiger").await;
        assert!(papers.is_empty());
    }
}
