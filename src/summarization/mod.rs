//! Feedback summarization
//!
//! A run splits stored feedback into segments (service × summary type ×
//! location), asks the language model for one summary per segment and replaces
//! the day's rows in the summaries table.

pub mod config;
pub mod generator;
pub mod segments;
pub mod service;

pub use config::SummariesConfig;
pub use generator::{GeneratedSummary, SummaryGenerator, SummaryOutcome};
pub use segments::{Location, Segment, SummaryType, enumerate_segments};
pub use service::{RunReport, SegmentPreview, SummarizationService};
