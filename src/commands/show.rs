use crate::{
    Config,
    database::{DatabaseManager, DatabaseManagerImpl},
    summarization::{SummaryType, segments::ALL_LOCATIONS},
};

pub async fn handle_show_command(
    service: &str,
    summary_type: SummaryType,
    location: Option<&str>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let db_manager = DatabaseManagerImpl::new_from_config(&config.database).await?;
    let location = location.unwrap_or(ALL_LOCATIONS);

    match db_manager
        .summaries()
        .find_latest(service, summary_type.as_str(), location)
        .await?
    {
        Some(summary) => {
            println!(
                "{} - {} - {} ({})",
                summary.service_type, summary.summary_type, summary.location, summary.generated_on
            );
            println!();
            println!("{}", summary.summary_text);
        }
        None => {
            println!(
                "No summary stored for {} - {} - {}",
                service, summary_type, location
            );
        }
    }

    Ok(())
}
