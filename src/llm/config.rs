use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Ollama generate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Full URL of the generate endpoint
    #[serde(default = "default_ollama_url")]
    pub url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_ollama_model")]
    pub model: String,
    /// Request timeout in seconds, 0 waits forever
    #[serde(default = "default_ollama_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ollama_url() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_ollama_model() -> String {
    "mistral:7b-instruct".to_string()
}

fn default_ollama_timeout_secs() -> u64 {
    300
}

impl OllamaConfig {
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: default_ollama_url(),
            model: default_ollama_model(),
            timeout_secs: default_ollama_timeout_secs(),
        }
    }
}
