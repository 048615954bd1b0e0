//! # Wildscribe Core
//!
//! Domain types, traits, and error definitions for the Wildscribe research
//! assistant. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The external text-generation capability is defined as a trait here
//! (`TextCompletion`); the HTTP binding lives in `wildscribe-providers`.
//! This keeps the answer pipeline pure and testable with scripted mocks.

pub mod completion;
pub mod error;
pub mod message;
pub mod query;
pub mod task;

// Re-export key types at crate root for ergonomics
pub use completion::{GenerationParams, TextCompletion};
pub use error::{CompletionError, Error, Result};
pub use message::ChatMessage;
pub use query::QueryType;
pub use task::{GenerationPlan, TaskResults, TaskTemplate};
