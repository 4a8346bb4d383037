//! Language-model completion clients
//!
//! Summarization only needs "prompt in, text out". Failures carry just enough
//! to render the error marker that gets stored in place of a summary.

pub mod config;
pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use thiserror::Error;

pub use config::OllamaConfig;
pub use mock::MockCompletionClient;
pub use ollama::OllamaClient;

/// Completion failure; `Display` is the exact text stored for a failed segment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Endpoint answered with a non-200 status
    #[error("Ollama error: {0}")]
    Status(u16),
    /// Request could not be sent or the body could not be decoded
    #[error("Exception: {0}")]
    Transport(String),
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Model identifier sent with every request
    fn model(&self) -> &str;

    /// Submit one non-streaming completion request and return the trimmed text
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
