//! TextCompletion trait — the abstraction over hosted text-generation
//! endpoints.
//!
//! A `TextCompletion` knows how to send one prompt to one named model and
//! return the generated text. The retry/fallback policy lives in the
//! orchestrator; implementations only translate transport outcomes into the
//! `CompletionError` taxonomy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

/// Tuning parameters forwarded with every completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum number of tokens to generate.
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Sampling temperature (0.0 = deterministic).
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Whether to sample instead of greedy decoding.
    #[serde(default = "default_sample")]
    pub sample: bool,
}

fn default_max_new_tokens() -> u32 {
    250
}

fn default_temperature() -> f32 {
    0.8
}

fn default_sample() -> bool {
    true
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            sample: default_sample(),
        }
    }
}

/// The external text-generation capability.
///
/// One call sends one prompt to one named model. Success carries the
/// generated text, which may be empty; the caller decides what emptiness
/// means. Failures are typed so the retry policy can branch on them.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> std::result::Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.max_new_tokens, 250);
        assert!((params.temperature - 0.8).abs() < f32::EPSILON);
        assert!(params.sample);
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: GenerationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.max_new_tokens, 250);
    }
}
