//! Error types for the Wildscribe domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Wildscribe operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Completion errors ---
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure conditions of the external text-generation capability.
///
/// `Clone` so the retry policy can log an attempt's error and still hand
/// it to the next decision step.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The model endpoint is warming up and asked us to come back later.
    #[error("model '{0}' is still loading")]
    TransientUnavailable(String),

    /// The model ran out of capacity for this request.
    #[error("model '{0}' is out of capacity")]
    ResourceExhausted(String),

    /// Any other API-level failure.
    #[error("completion request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    /// The request never reached the endpoint.
    #[error("network error: {0}")]
    Network(String),
}

impl CompletionError {
    /// Whether retrying the same endpoint later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, CompletionError::TransientUnavailable(_))
    }

    /// Whether a smaller fallback model should be attempted instead.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, CompletionError::ResourceExhausted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_error_displays_correctly() {
        let err = Error::Completion(CompletionError::Api {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn transient_classification() {
        assert!(CompletionError::TransientUnavailable("m".into()).is_transient());
        assert!(!CompletionError::TransientUnavailable("m".into()).is_exhausted());
        assert!(CompletionError::ResourceExhausted("m".into()).is_exhausted());
        assert!(!CompletionError::Network("down".into()).is_transient());
    }
}
