use super::{CompletionClient, CompletionError, OllamaConfig};
use crate::health::{HealthCheckResult, HealthChecker};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Client for Ollama's `/api/generate` endpoint
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self, CompletionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl CompletionClient for OllamaClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        debug!(
            "POST {} (model: {}, prompt: {} bytes)",
            self.config.url,
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.config.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CompletionError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        Ok(body.response.trim().to_string())
    }
}

#[async_trait]
impl HealthChecker for OllamaClient {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn check(&self) -> HealthCheckResult {
        match self.complete("Hello").await {
            Ok(reply) => HealthCheckResult::healthy_with_details(serde_json::json!({
                "url": self.config.url,
                "model": self.config.model,
                "response": reply,
            })),
            Err(err) => HealthCheckResult::unhealthy_with_details(
                "Failed to connect to Ollama".to_string(),
                serde_json::json!({
                    "url": self.config.url,
                    "model": self.config.model,
                    "error": err.to_string(),
                }),
            ),
        }
    }
}
