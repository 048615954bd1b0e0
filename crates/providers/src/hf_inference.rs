//! Hugging Face Inference API binding.
//!
//! One client serves every model in the fallback chain; the orchestrator
//! picks the model per call. Transport and HTTP-level outcomes are mapped
//! into the `CompletionError` taxonomy:
//!
//! - 503 → `TransientUnavailable` (the hosted model is still loading)
//! - 500 with a CUDA out-of-memory body → `ResourceExhausted`
//! - any other non-200 → `Api`
//!
//! A 200 body is either a JSON array of generations or a bare generation
//! object; both carry `generated_text`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use wildscribe_core::{CompletionError, GenerationParams, TextCompletion};

/// Default endpoint prefix; the model id is appended per request.
pub const HF_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Marker string the hosted API embeds in capacity-exhausted 500 bodies.
const CUDA_OOM_MARKER: &str = "CUDA out of memory";

pub struct HfInferenceClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HfInferenceClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: HF_INFERENCE_BASE_URL.to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl TextCompletion for HfInferenceClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, CompletionError> {
        let url = format!("{}/{}", self.base_url, model);

        let body = serde_json::json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": params.max_new_tokens,
                "do_sample": params.sample,
                "temperature": params.temperature,
            }
        });

        debug!(model, prompt_len = prompt.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 503 {
            return Err(CompletionError::TransientUnavailable(model.to_string()));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            if status == 500 && error_body.contains(CUDA_OOM_MARKER) {
                return Err(CompletionError::ResourceExhausted(model.to_string()));
            }
            warn!(model, status, body = %error_body, "Completion endpoint returned error");
            return Err(CompletionError::Api {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: HfResponse =
            response.json().await.map_err(|e| CompletionError::Api {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        Ok(api_response.into_text())
    }
}

// --- Hugging Face API types (internal) ---

/// A 200 body: list-wrapped on most models, a bare object on some.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HfResponse {
    Many(Vec<HfGeneration>),
    One(HfGeneration),
}

#[derive(Debug, Deserialize)]
struct HfGeneration {
    #[serde(default)]
    generated_text: String,
}

impl HfResponse {
    fn into_text(self) -> String {
        match self {
            HfResponse::Many(mut generations) => {
                if generations.is_empty() {
                    String::new()
                } else {
                    generations.swap_remove(0).generated_text
                }
            }
            HfResponse::One(generation) => generation.generated_text,
        }
    }
}
