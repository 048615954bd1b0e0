//! `wildscribe ask` — Answer one question and print the result.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use wildscribe_config::AppConfig;
use wildscribe_core::GenerationParams;
use wildscribe_engine::{ModelChain, ResearchPipeline, RetryPolicy};
use wildscribe_providers::HfInferenceClient;

pub async fn run(query: &str) -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;

    let api_key = config
        .api_key
        .clone()
        .context("No completion API key configured. Set HUGGINGFACE_API_KEY")?;

    let models = ModelChain::new(&config.models.primary)
        .with_fallback(&config.models.secondary)
        .with_fallback(&config.models.tertiary);
    let params = GenerationParams {
        max_new_tokens: config.generation.max_new_tokens,
        temperature: config.generation.temperature,
        sample: config.generation.sample,
    };
    let policy = RetryPolicy {
        retries: config.retry.retries,
        delay: Duration::from_secs(config.retry.delay_secs),
    };

    let pipeline = ResearchPipeline::new(
        Arc::new(HfInferenceClient::new(api_key)),
        models,
        params,
        policy,
    );

    let answer = pipeline.answer(query, &[]).await;
    println!("{answer}");

    Ok(())
}
