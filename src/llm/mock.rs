use super::{CompletionClient, CompletionError};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// Mock completion client that records every prompt it receives
pub struct MockCompletionClient {
    pub response_mode: MockResponseMode,
    prompts: Mutex<Vec<String>>,
}

#[derive(Clone, Debug)]
pub enum MockResponseMode {
    /// Always return the same text
    Fixed(String),
    /// Return the prompt's first line, useful to tell segments apart
    EchoFirstLine,
    /// Always fail with the given error
    Fail(CompletionError),
}

impl MockCompletionClient {
    /// Create a new mock client with a default success response
    pub fn new() -> Self {
        Self::with_mode(MockResponseMode::Fixed("Mock summary".to_string()))
    }

    pub fn with_response(text: &str) -> Self {
        Self::with_mode(MockResponseMode::Fixed(text.to_string()))
    }

    pub fn with_error(error: CompletionError) -> Self {
        Self::with_mode(MockResponseMode::Fail(error))
    }

    pub fn with_mode(response_mode: MockResponseMode) -> Self {
        Self {
            response_mode,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of completion requests made so far
    pub fn call_count(&self) -> usize {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Prompts received, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());

        match &self.response_mode {
            MockResponseMode::Fixed(text) => Ok(text.clone()),
            MockResponseMode::EchoFirstLine => {
                Ok(prompt.lines().next().unwrap_or_default().to_string())
            }
            MockResponseMode::Fail(error) => Err(error.clone()),
        }
    }
}
