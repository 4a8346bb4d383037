use crate::database::{
    DatabaseManager, DatabaseManagerImpl, config::DatabaseConfig, entities::FeedbackRecord,
};
use std::sync::Arc;

/// Builds a migrated in-memory SQLite store seeded with feedback rows
pub struct TestDatabaseBuilder {
    config: DatabaseConfig,
    feedback: Vec<FeedbackRecord>,
}

impl TestDatabaseBuilder {
    pub fn new() -> Self {
        Self {
            // A single pooled connection keeps every query on the same in-memory database
            config: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            feedback: Vec::new(),
        }
    }

    /// Use a custom database configuration
    pub fn with_config(mut self, config: DatabaseConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed one feedback row
    pub fn with_feedback(mut self, record: FeedbackRecord) -> Self {
        self.feedback.push(record);
        self
    }

    /// Seed several feedback rows
    pub fn with_feedback_rows(mut self, records: impl IntoIterator<Item = FeedbackRecord>) -> Self {
        self.feedback.extend(records);
        self
    }

    /// Connect, migrate and insert the seeded rows
    pub async fn build(self) -> Arc<DatabaseManagerImpl> {
        let database = DatabaseManagerImpl::new_from_config(&self.config)
            .await
            .expect("Failed to connect to test database");
        database
            .migrate()
            .await
            .expect("Failed to run test database migrations");

        for record in &self.feedback {
            database
                .feedback()
                .insert(record)
                .await
                .expect("Failed to seed feedback");
        }

        Arc::new(database)
    }
}

impl Default for TestDatabaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Feedback row with the fields a run filters on.
///
/// `seq` becomes a zero-padded `fb_` id, so rows sort in `seq` order.
pub fn feedback_record(
    seq: u32,
    review_text: Option<&str>,
    service_type: &str,
    positive: bool,
    negative: bool,
    issue_location: Option<&str>,
) -> FeedbackRecord {
    FeedbackRecord {
        id: format!("fb_{:06}", seq),
        review_text: review_text.map(String::from),
        service_type: Some(service_type.to_string()),
        review_rating: Some(if positive { 5 } else if negative { 1 } else { 3 }),
        positive_flag: positive,
        negative_flag: negative,
        issue_location: issue_location.map(String::from),
    }
}
