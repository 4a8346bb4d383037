pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod health;
pub mod llm;
pub mod summarization;
pub mod test_utils;

pub use config::Config;
pub use summarization::SummarizationService;
