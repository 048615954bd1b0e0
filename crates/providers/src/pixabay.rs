//! Pixabay image search.
//!
//! Best-effort enrichment: any failure (network, HTTP, JSON, zero hits)
//! yields the fixed fallback image instead of an error, so a broken lookup
//! never degrades the answer itself.

use serde::Deserialize;
use tracing::{debug, warn};

/// Shown when the lookup fails or returns no usable hits.
pub const FALLBACK_IMAGE_URL: &str =
    "https://cdn.pixabay.com/photo/2017/06/06/22/08/bird-2376974_1280.jpg";

const PIXABAY_BASE_URL: &str = "https://pixabay.com/api/";

pub struct PixabayClient {
    base_url: String,
    api_key: String,
    per_page: u32,
    client: reqwest::Client,
}

impl PixabayClient {
    pub fn new(api_key: impl Into<String>, per_page: u32) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: PIXABAY_BASE_URL.to_string(),
            api_key: api_key.into(),
            per_page,
            client,
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search photos for a query, returning their web-format URLs.
    pub async fn search_images(&self, query: &str) -> Vec<String> {
        let per_page = self.per_page.to_string();
        let request = self.client.get(&self.base_url).query(&[
            ("key", self.api_key.as_str()),
            ("q", query),
            ("image_type", "photo"),
            ("per_page", per_page.as_str()),
        ]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Pixabay request failed");
                return vec![FALLBACK_IMAGE_URL.to_string()];
            }
        };

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), "Pixabay returned error");
            return vec![FALLBACK_IMAGE_URL.to_string()];
        }

        let parsed: PixabayResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Failed to parse Pixabay response");
                return vec![FALLBACK_IMAGE_URL.to_string()];
            }
        };

        let urls: Vec<String> = parsed
            .hits
            .into_iter()
            .filter_map(|hit| hit.webformat_url)
            .collect();

        if urls.is_empty() {
            debug!(query, "Pixabay returned no usable hits");
            return vec![FALLBACK_IMAGE_URL.to_string()];
        }

        urls
    }
}

#[derive(Debug, Deserialize)]
struct PixabayResponse {
    #[serde(default)]
    hits: Vec<PixabayHit>,
}

#[derive(Debug, Deserialize)]
struct PixabayHit {
    #[serde(rename = "webformatURL")]
    webformat_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hits() {
        let body = r#"{"hits": [
            {"webformatURL": "https://example.com/a.jpg"},
            {"webformatURL": "https://example.com/b.jpg"},
            {"other": 1}
        ]}"#;
        let parsed: PixabayResponse = serde_json::from_str(body).unwrap();
        let urls: Vec<String> = parsed
            .hits
            .into_iter()
            .filter_map(|h| h.webformat_url)
            .collect();
        assert_eq!(urls, vec!["https://example.com/a.jpg", "https://example.com/b.jpg"]);
    }

    #[test]
    fn tolerates_missing_hits_key() {
        let parsed: PixabayResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.hits.is_empty());
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_fallback_image() {
        let client =
            PixabayClient::new("key", 3).with_base_url("http://127.0.0.1:1/api/");
        let urls = client.search_images("tiger").await;
        assert_eq!(urls, vec![FALLBACK_IMAGE_URL.to_string()]);
    }
}
