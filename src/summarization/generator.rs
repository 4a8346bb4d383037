use super::segments::{Location, Segment};
use crate::database::{DatabaseResult, FeedbackDao};
use crate::llm::CompletionClient;
use sea_orm::ConnectionTrait;
use std::sync::Arc;
use tracing::{debug, warn};

/// How a segment's summary text was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Text returned by the model
    Generated,
    /// No matching feedback; placeholder text, model not called
    NoFeedback,
    /// Model call failed; text is the error marker
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSummary {
    pub text: String,
    pub outcome: SummaryOutcome,
    pub review_count: usize,
}

/// Text stored for a segment without any matching feedback
pub fn placeholder(segment: &Segment) -> String {
    format!(
        "No feedback available for {} sentiment on {} in {}.",
        segment.summary_type.as_lowercase(),
        segment.service,
        segment.location.label()
    )
}

/// Instruction line, a blank line, then one review per line
pub fn build_prompt(segment: &Segment, reviews: &[String]) -> String {
    let scope = match &segment.location {
        Location::All => "across all locations".to_string(),
        Location::Named(name) => format!("in {}", name),
    };

    format!(
        "Generate a short and insightful summary of customer feedback for {} services with {} sentiment {}:\n\n{}",
        segment.service,
        segment.summary_type.as_lowercase(),
        scope,
        reviews.join("\n")
    )
}

/// Produces the summary text for one segment
pub struct SummaryGenerator {
    client: Arc<dyn CompletionClient>,
    fetch_limit: u64,
}

impl SummaryGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, fetch_limit: u64) -> Self {
        Self {
            client,
            fetch_limit,
        }
    }

    /// Non-empty review texts for the segment, at most `fetch_limit` rows read
    pub async fn fetch_reviews<C: ConnectionTrait>(
        &self,
        db: &C,
        segment: &Segment,
    ) -> DatabaseResult<Vec<String>> {
        FeedbackDao::new(db)
            .find_review_texts(&segment.filter(), self.fetch_limit)
            .await
    }

    /// Fetch the segment's reviews and summarize them.
    ///
    /// Only store failures are errors; model failures become the summary text.
    pub async fn generate<C: ConnectionTrait>(
        &self,
        db: &C,
        segment: &Segment,
    ) -> DatabaseResult<GeneratedSummary> {
        let reviews = self.fetch_reviews(db, segment).await?;
        debug!("Fetched {} reviews for {}", reviews.len(), segment);
        Ok(self.summarize_reviews(segment, &reviews).await)
    }

    pub async fn summarize_reviews(&self, segment: &Segment, reviews: &[String]) -> GeneratedSummary {
        if reviews.is_empty() {
            return GeneratedSummary {
                text: placeholder(segment),
                outcome: SummaryOutcome::NoFeedback,
                review_count: 0,
            };
        }

        let prompt = build_prompt(segment, reviews);
        match self.client.complete(&prompt).await {
            Ok(text) => GeneratedSummary {
                text,
                outcome: SummaryOutcome::Generated,
                review_count: reviews.len(),
            },
            Err(err) => {
                warn!("Summary for {} failed: {}", segment, err);
                GeneratedSummary {
                    text: err.to_string(),
                    outcome: SummaryOutcome::Failed,
                    review_count: reviews.len(),
                }
            }
        }
    }
}
