use super::{
    SummariesConfig,
    generator::{SummaryGenerator, SummaryOutcome},
    segments::{Segment, enumerate_segments},
};
use crate::{
    database::{
        DatabaseError, DatabaseManager, FeedbackDao, SummariesDao, entities::SummaryRecord,
    },
    error::AppError,
    llm::CompletionClient,
};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::info;

/// Outcome counts of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub date: NaiveDate,
    /// Rows for `date` removed before regeneration
    pub deleted: u64,
    pub generated: usize,
    pub no_feedback: usize,
    pub failed: usize,
}

impl RunReport {
    fn new(date: NaiveDate, deleted: u64) -> Self {
        Self {
            date,
            deleted,
            generated: 0,
            no_feedback: 0,
            failed: 0,
        }
    }

    fn record(&mut self, outcome: SummaryOutcome) {
        match outcome {
            SummaryOutcome::Generated => self.generated += 1,
            SummaryOutcome::NoFeedback => self.no_feedback += 1,
            SummaryOutcome::Failed => self.failed += 1,
        }
    }

    /// Number of summary rows written
    pub fn total(&self) -> usize {
        self.generated + self.no_feedback + self.failed
    }
}

/// A segment and how many reviews a run would summarize for it
#[derive(Debug, Clone)]
pub struct SegmentPreview {
    pub segment: Segment,
    pub review_count: usize,
}

/// Run driver: regenerates a day's summaries in one transaction
pub struct SummarizationService {
    database: Arc<dyn DatabaseManager>,
    generator: SummaryGenerator,
    config: SummariesConfig,
}

impl SummarizationService {
    pub fn new(
        database: Arc<dyn DatabaseManager>,
        client: Arc<dyn CompletionClient>,
        config: SummariesConfig,
    ) -> Self {
        let generator = SummaryGenerator::new(client, config.fetch_limit);
        Self {
            database,
            generator,
            config,
        }
    }

    /// Regenerate summaries for the current local date
    pub async fn run_today(&self) -> Result<RunReport, AppError> {
        self.run(Local::now().date_naive()).await
    }

    /// Replace every summary dated `date` with freshly generated ones.
    ///
    /// The delete and all inserts share one transaction. Any store error
    /// returns early and the dropped transaction rolls back, leaving the
    /// previous rows for `date` untouched. Concurrent runs for the same date
    /// are not coordinated and can interleave their deletes and inserts.
    pub async fn run(&self, date: NaiveDate) -> Result<RunReport, AppError> {
        let txn = self.database.begin().await?;
        let summaries = SummariesDao::new(&txn);

        let deleted = summaries.delete_for_date(date).await?;
        info!("Removed {} existing summaries for {}", deleted, date);

        let locations = FeedbackDao::new(&txn).distinct_locations().await?;
        info!("Found {} distinct issue locations", locations.len());

        let segments = enumerate_segments(
            &self.config.services,
            &self.config.summary_types,
            &locations,
        );
        info!("Generating {} summaries for {}", segments.len(), date);

        let mut report = RunReport::new(date, deleted);
        for segment in &segments {
            info!("Generating summary for {}...", segment);

            let summary = self.generator.generate(&txn, segment).await?;
            summaries
                .insert(&SummaryRecord {
                    id: 0, // Will be set by database
                    service_type: segment.service.clone(),
                    location: segment.location.label().to_string(),
                    summary_type: segment.summary_type.to_string(),
                    summary_text: summary.text,
                    generated_on: date,
                })
                .await?;

            report.record(summary.outcome);
        }

        txn.commit()
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        info!(
            "Saved {} summaries for {} ({} generated, {} without feedback, {} failed)",
            report.total(),
            date,
            report.generated,
            report.no_feedback,
            report.failed
        );
        Ok(report)
    }

    /// Segments a run would produce with their review counts; writes nothing
    /// and never calls the model
    pub async fn preview(&self) -> Result<Vec<SegmentPreview>, AppError> {
        let connection = self.database.connection();
        let locations = self.database.feedback().distinct_locations().await?;
        let segments = enumerate_segments(
            &self.config.services,
            &self.config.summary_types,
            &locations,
        );

        let mut previews = Vec::with_capacity(segments.len());
        for segment in segments {
            let reviews = self.generator.fetch_reviews(connection, &segment).await?;
            previews.push(SegmentPreview {
                segment,
                review_count: reviews.len(),
            });
        }

        Ok(previews)
    }
}
