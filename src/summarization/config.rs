use super::SummaryType;
use serde::{Deserialize, Serialize};

/// Configuration for summary generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummariesConfig {
    /// Services to summarize; "Overall" spans every service
    #[serde(default = "default_services")]
    pub services: Vec<String>,
    /// Sentiment slices to summarize for every service
    #[serde(default = "default_summary_types")]
    pub summary_types: Vec<SummaryType>,
    /// Maximum feedback rows read per segment; extra rows are silently ignored
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u64,
}

fn default_services() -> Vec<String> {
    ["Overall", "Core Banking", "ATM", "Online Banking"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_summary_types() -> Vec<SummaryType> {
    SummaryType::ALL.to_vec()
}

fn default_fetch_limit() -> u64 {
    100
}

impl Default for SummariesConfig {
    fn default() -> Self {
        Self {
            services: default_services(),
            summary_types: default_summary_types(),
            fetch_limit: default_fetch_limit(),
        }
    }
}
