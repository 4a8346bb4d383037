use crate::{
    Config,
    database::{DatabaseManager, DatabaseManagerImpl},
    llm::OllamaClient,
    summarization::SummarizationService,
};
use std::sync::Arc;
use tracing::info;

pub async fn handle_run_command(
    dry_run: bool,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let database: Arc<dyn DatabaseManager> =
        Arc::new(DatabaseManagerImpl::new_from_config(&config.database).await?);
    let client = Arc::new(OllamaClient::new(config.ollama.clone())?);

    info!(
        "Using model {} at {}",
        config.ollama.model, config.ollama.url
    );

    let service = SummarizationService::new(database, client, config.summaries.clone());

    if dry_run {
        let previews = service.preview().await?;
        info!(
            "DRY RUN: Would generate {} summaries",
            previews.len()
        );
        for preview in &previews {
            println!("{}: {} reviews", preview.segment, preview.review_count);
        }
        return Ok(());
    }

    let report = service.run_today().await?;
    info!(
        "Summaries generated with {} and saved to database ({} rows for {})",
        config.ollama.model,
        report.total(),
        report.date
    );

    Ok(())
}
