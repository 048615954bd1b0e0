//! HTTP API gateway for Wildscribe.
//!
//! Endpoints:
//!
//! - `GET  /`          — Service status
//! - `POST /api/chat`  — Answer a query with optional chat history
//!
//! Built on Axum. CORS is open to any origin so browser frontends can call
//! the API directly.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use wildscribe_config::AppConfig;
use wildscribe_core::{ChatMessage, GenerationParams, TextCompletion};
use wildscribe_engine::{is_query_relevant, ModelChain, ResearchPipeline, RetryPolicy};
use wildscribe_providers::{HfInferenceClient, PaperSummary, PixabayClient, SemanticScholarClient};

/// Shared application state for the gateway.
pub struct GatewayState {
    pub pipeline: ResearchPipeline,
    /// Image search; `None` when no Pixabay key is configured.
    pub images: Option<PixabayClient>,
    /// Paper search; `None` disables the lookup (tests).
    pub papers: Option<SemanticScholarClient>,
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(status_handler))
        .route("/api/chat", post(chat_handler))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let api_key = config
        .api_key
        .clone()
        .ok_or("No completion API key configured. Set HUGGINGFACE_API_KEY")?;

    let client: Arc<dyn TextCompletion> = Arc::new(HfInferenceClient::new(api_key));

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

    let images = config
        .enrichment
        .pixabay_api_key
        .as_ref()
        .map(|key| PixabayClient::new(key, config.enrichment.images_per_query));

    let state = Arc::new(GatewayState {
        pipeline: ResearchPipeline::new(client, models, params, policy),
        images,
        papers: Some(SemanticScholarClient::new(
            config.enrichment.papers_per_query,
        )),
    });

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Request / Response types ---

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    query: String,

    #[serde(default, rename = "chatHistory")]
    chat_history: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatResponse {
    answer: String,
    research: Option<Vec<PaperSummary>>,
    images: Option<Vec<String>>,
    image_url: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    version: &'static str,
}

// --- Handlers ---

async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    if payload.query.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No query provided".into(),
            }),
        ));
    }

    info!(
        query_len = payload.query.len(),
        history_len = payload.chat_history.len(),
        "api/chat request"
    );

    let answer = state
        .pipeline
        .answer(&payload.query, &payload.chat_history)
        .await;

    let (research, images, image_url) = if is_query_relevant(&payload.query) {
        enrich(&state, &payload.query).await
    } else {
        (None, None, None)
    };

    Ok(Json(ChatResponse {
        answer,
        research,
        images,
        image_url,
    }))
}

/// Run the configured enrichment lookups concurrently.
async fn enrich(
    state: &GatewayState,
    query: &str,
) -> (
    Option<Vec<PaperSummary>>,
    Option<Vec<String>>,
    Option<String>,
) {
    match (&state.papers, &state.images) {
        (Some(papers), Some(images)) => {
            let (found_papers, found_images) =
                tokio::join!(papers.search_papers(query), images.search_images(query));
            let first = found_images.first().cloned();
            (Some(found_papers), Some(found_images), first)
        }
        (Some(papers), None) => (Some(papers.search_papers(query).await), None, None),
        (None, Some(images)) => {
            let found_images = images.search_images(query).await;
            let first = found_images.first().cloned();
            (None, Some(found_images), first)
        }
        (None, None) => (None, None, None),
    }
}
