use chrono::NaiveDate;
use feedback_summarizer::{
    database::{DatabaseManager, DatabaseManagerImpl, entities::SummaryRecord},
    error::AppError,
    llm::{CompletionError, MockCompletionClient, mock::MockResponseMode},
    summarization::{SummariesConfig, SummarizationService, SummaryType},
    test_utils::{TestDatabaseBuilder, feedback_record},
};
use sea_orm::ConnectionTrait;
use std::sync::Arc;

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()
}

fn summaries_config(services: &[&str], summary_types: &[SummaryType]) -> SummariesConfig {
    SummariesConfig {
        services: services.iter().map(|s| s.to_string()).collect(),
        summary_types: summary_types.to_vec(),
        ..SummariesConfig::default()
    }
}

fn service_for(
    database: &Arc<DatabaseManagerImpl>,
    client: &Arc<MockCompletionClient>,
    config: SummariesConfig,
) -> SummarizationService {
    SummarizationService::new(database.clone(), client.clone(), config)
}

fn stored_summary(service: &str, summary_type: &str, text: &str, date: NaiveDate) -> SummaryRecord {
    SummaryRecord {
        id: 0,
        service_type: service.to_string(),
        location: "All".to_string(),
        summary_type: summary_type.to_string(),
        summary_text: text.to_string(),
        generated_on: date,
    }
}

#[tokio::test]
async fn test_empty_store_writes_placeholder_without_model_call() {
    let database = TestDatabaseBuilder::new().build().await;
    let client = Arc::new(MockCompletionClient::new());
    let service = service_for(
        &database,
        &client,
        summaries_config(&["Overall"], &[SummaryType::Positive]),
    );

    let report = service.run(run_date()).await.unwrap();

    assert_eq!(report.total(), 1);
    assert_eq!(report.no_feedback, 1);
    assert_eq!(client.call_count(), 0);

    let rows = database.summaries().find_for_date(run_date()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].service_type, "Overall");
    assert_eq!(rows[0].summary_type, "Positive");
    assert_eq!(rows[0].location, "All");
    assert_eq!(
        rows[0].summary_text,
        "No feedback available for positive sentiment on Overall in All."
    );
}

#[tokio::test]
async fn test_prompt_lists_reviews_after_instruction() {
    let database = TestDatabaseBuilder::new()
        .with_feedback(feedback_record(1, Some("Great service"), "ATM", true, false, None))
        .with_feedback(feedback_record(2, Some("Fast response"), "ATM", true, false, None))
        .with_feedback(feedback_record(3, Some("Card eaten"), "ATM", false, true, None))
        .build()
        .await;
    let client = Arc::new(MockCompletionClient::with_response("Customers like the ATMs."));
    let service = service_for(
        &database,
        &client,
        summaries_config(&["ATM"], &[SummaryType::Positive]),
    );

    let report = service.run(run_date()).await.unwrap();

    assert_eq!(report.generated, 1);
    assert_eq!(
        client.prompts(),
        vec![
            "Generate a short and insightful summary of customer feedback for ATM services with positive sentiment across all locations:\n\nGreat service\nFast response"
                .to_string()
        ]
    );

    let rows = database.summaries().find_for_date(run_date()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].summary_text, "Customers like the ATMs.");
}

#[tokio::test]
async fn test_overall_service_and_type_span_everything() {
    let database = TestDatabaseBuilder::new()
        .with_feedback(feedback_record(1, Some("Quick transfer"), "Online Banking", true, false, None))
        .with_feedback(feedback_record(2, Some("Long queue"), "Core Banking", false, true, None))
        .with_feedback(feedback_record(3, Some("It works"), "ATM", false, false, None))
        .build()
        .await;
    let client = Arc::new(MockCompletionClient::new());
    let service = service_for(
        &database,
        &client,
        summaries_config(&["Overall"], &[SummaryType::Overall]),
    );

    service.run(run_date()).await.unwrap();

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with(
        "Generate a short and insightful summary of customer feedback for Overall services with overall sentiment across all locations:"
    ));
    assert!(prompts[0].ends_with("\n\nQuick transfer\nLong queue\nIt works"));
}

#[tokio::test]
async fn test_location_segments_follow_all_segment_in_order() {
    let database = TestDatabaseBuilder::new()
        .with_feedback(feedback_record(1, Some("Slow teller"), "ATM", false, true, Some("Branch B")))
        .with_feedback(feedback_record(2, Some("Broken screen"), "ATM", false, true, Some("Branch A")))
        .with_feedback(feedback_record(3, Some("Nice staff"), "ATM", true, false, Some("Branch C")))
        .with_feedback(feedback_record(4, Some("No location"), "ATM", false, true, Some("")))
        .build()
        .await;
    let client = Arc::new(MockCompletionClient::with_mode(MockResponseMode::EchoFirstLine));
    let service = service_for(
        &database,
        &client,
        summaries_config(&["ATM"], &[SummaryType::Negative]),
    );

    let report = service.run(run_date()).await.unwrap();
    assert_eq!(report.total(), 4);
    assert_eq!(report.generated, 3);
    assert_eq!(report.no_feedback, 1);

    let rows = database.summaries().find_for_date(run_date()).await.unwrap();
    let locations: Vec<&str> = rows.iter().map(|row| row.location.as_str()).collect();
    assert_eq!(locations, vec!["All", "Branch A", "Branch B", "Branch C"]);

    assert_eq!(
        rows[1].summary_text,
        "Generate a short and insightful summary of customer feedback for ATM services with negative sentiment in Branch A:"
    );
    assert_eq!(
        rows[3].summary_text,
        "No feedback available for negative sentiment on ATM in Branch C."
    );

    let prompts = client.prompts();
    assert!(prompts[0].ends_with("\n\nSlow teller\nBroken screen\nNo location"));
    assert!(prompts[2].ends_with("\n\nSlow teller"));
}

#[tokio::test]
async fn test_rerun_replaces_rows_for_the_same_date() {
    let database = TestDatabaseBuilder::new()
        .with_feedback(feedback_record(1, Some("Great app"), "Online Banking", true, false, Some("Mobile")))
        .build()
        .await;
    let client = Arc::new(MockCompletionClient::new());
    let service = service_for(&database, &client, SummariesConfig::default());

    let first = service.run(run_date()).await.unwrap();
    // 4 services x 3 types x (All + Mobile)
    assert_eq!(first.total(), 24);
    assert_eq!(first.deleted, 0);

    let second = service.run(run_date()).await.unwrap();
    assert_eq!(second.deleted, 24);
    assert_eq!(second.total(), 24);

    let rows = database.summaries().find_for_date(run_date()).await.unwrap();
    assert_eq!(rows.len(), 24);

    let mut keys: Vec<(String, String, String)> = rows
        .iter()
        .map(|row| {
            (
                row.service_type.clone(),
                row.summary_type.clone(),
                row.location.clone(),
            )
        })
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 24);
}

#[tokio::test]
async fn test_rows_for_other_dates_are_kept() {
    let database = TestDatabaseBuilder::new().build().await;
    let yesterday = run_date().pred_opt().unwrap();
    database
        .summaries()
        .insert(&stored_summary("ATM", "Positive", "Yesterday's summary", yesterday))
        .await
        .unwrap();
    database
        .summaries()
        .insert(&stored_summary("ATM", "Positive", "Stale summary", run_date()))
        .await
        .unwrap();

    let client = Arc::new(MockCompletionClient::new());
    let service = service_for(
        &database,
        &client,
        summaries_config(&["Overall"], &[SummaryType::Negative]),
    );
    let report = service.run(run_date()).await.unwrap();
    assert_eq!(report.deleted, 1);

    let old_rows = database.summaries().find_for_date(yesterday).await.unwrap();
    assert_eq!(old_rows.len(), 1);
    assert_eq!(old_rows[0].summary_text, "Yesterday's summary");

    let new_rows = database.summaries().find_for_date(run_date()).await.unwrap();
    assert_eq!(new_rows.len(), 1);
    assert_eq!(new_rows[0].service_type, "Overall");
}

#[tokio::test]
async fn test_model_failures_are_stored_as_text() {
    let database = TestDatabaseBuilder::new()
        .with_feedback(feedback_record(1, Some("Card eaten"), "ATM", false, true, None))
        .build()
        .await;

    let client = Arc::new(MockCompletionClient::with_error(CompletionError::Status(500)));
    let service = service_for(
        &database,
        &client,
        summaries_config(&["ATM"], &[SummaryType::Negative, SummaryType::Positive]),
    );
    let report = service.run(run_date()).await.unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.no_feedback, 1);
    assert_eq!(client.call_count(), 1);

    let rows = database.summaries().find_for_date(run_date()).await.unwrap();
    assert_eq!(rows[0].summary_text, "Ollama error: 500");
    assert_eq!(
        rows[1].summary_text,
        "No feedback available for positive sentiment on ATM in All."
    );

    let client = Arc::new(MockCompletionClient::with_error(CompletionError::Transport(
        "connection refused".to_string(),
    )));
    let service = service_for(
        &database,
        &client,
        summaries_config(&["ATM"], &[SummaryType::Negative]),
    );
    service.run(run_date()).await.unwrap();

    let rows = database.summaries().find_for_date(run_date()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].summary_text.starts_with("Exception: "));
}

#[tokio::test]
async fn test_fetch_limit_applies_before_empty_texts_are_dropped() {
    let database = TestDatabaseBuilder::new()
        .with_feedback(feedback_record(1, None, "ATM", true, false, None))
        .with_feedback(feedback_record(2, Some("First"), "ATM", true, false, None))
        .with_feedback(feedback_record(3, Some("Second"), "ATM", true, false, None))
        .with_feedback(feedback_record(4, Some(""), "ATM", true, false, None))
        .build()
        .await;
    let client = Arc::new(MockCompletionClient::new());
    let config = SummariesConfig {
        fetch_limit: 2,
        ..summaries_config(&["ATM"], &[SummaryType::Positive])
    };
    let service = service_for(&database, &client, config);

    service.run(run_date()).await.unwrap();

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].ends_with(":\n\nFirst"));
}

#[tokio::test]
async fn test_preview_counts_reviews_without_writing() {
    let database = TestDatabaseBuilder::new()
        .with_feedback(feedback_record(1, Some("Helpful"), "ATM", true, false, Some("Mall")))
        .with_feedback(feedback_record(2, Some("Friendly"), "ATM", true, false, None))
        .build()
        .await;
    let client = Arc::new(MockCompletionClient::new());
    let service = service_for(
        &database,
        &client,
        summaries_config(&["ATM"], &[SummaryType::Positive]),
    );

    let previews = service.preview().await.unwrap();

    let counts: Vec<(String, usize)> = previews
        .iter()
        .map(|preview| (preview.segment.to_string(), preview.review_count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("ATM - Positive - All".to_string(), 2),
            ("ATM - Positive - Mall".to_string(), 1),
        ]
    );
    assert_eq!(client.call_count(), 0);
    assert!(
        database
            .summaries()
            .find_for_date(run_date())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_store_failure_rolls_back_the_delete() {
    let database = TestDatabaseBuilder::new().build().await;
    database
        .summaries()
        .insert(&stored_summary("ATM", "Positive", "Kept summary", run_date()))
        .await
        .unwrap();
    database
        .connection()
        .execute_unprepared("DROP TABLE feedback")
        .await
        .unwrap();

    let client = Arc::new(MockCompletionClient::new());
    let service = service_for(&database, &client, SummariesConfig::default());

    let err = service.run(run_date()).await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));

    let rows = database.summaries().find_for_date(run_date()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].summary_text, "Kept summary");
}

#[tokio::test]
async fn test_find_latest_returns_newest_summary() {
    let database = TestDatabaseBuilder::new().build().await;
    let earlier = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    database
        .summaries()
        .insert(&stored_summary("ATM", "Negative", "Newest", run_date()))
        .await
        .unwrap();
    database
        .summaries()
        .insert(&stored_summary("ATM", "Negative", "Older", earlier))
        .await
        .unwrap();

    let latest = database
        .summaries()
        .find_latest("ATM", "Negative", "All")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.summary_text, "Newest");
    assert_eq!(latest.generated_on, run_date());

    assert!(
        database
            .summaries()
            .find_latest("ATM", "Positive", "All")
            .await
            .unwrap()
            .is_none()
    );
}
