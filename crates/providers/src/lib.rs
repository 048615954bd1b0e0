//! External service bindings for Wildscribe.
//!
//! The completion client implements `wildscribe_core::TextCompletion`;
//! the image and paper lookups are optional enrichments attached to
//! relevant answers by the gateway.

pub mod hf_inference;
pub mod pixabay;
pub mod semantic_scholar;

pub use hf_inference::HfInferenceClient;
pub use pixabay::PixabayClient;
pub use semantic_scholar::{PaperSummary, SemanticScholarClient};
