use crate::{
    Config,
    database::DatabaseManagerImpl,
    health::{HealthService, HealthStatus},
    llm::OllamaClient,
};
use std::sync::Arc;

pub async fn handle_check_command(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut health = HealthService::new();
    health.register(Arc::new(
        DatabaseManagerImpl::new_from_config(&config.database).await?,
    ));
    health.register(Arc::new(OllamaClient::new(config.ollama.clone())?));

    let report = health.check_all().await;
    for (name, result) in &report.checks {
        let status = match result.status {
            HealthStatus::Healthy => "ok",
            HealthStatus::Unhealthy => "FAILED",
        };
        println!(
            "{:<10} {:<7} {}ms {}",
            name,
            status,
            result.duration_ms.unwrap_or_default(),
            result.message.as_deref().unwrap_or_default()
        );
        if let Some(details) = &result.details {
            println!("           {}", details);
        }
    }

    if !report.is_healthy() {
        return Err("One or more health checks failed".into());
    }

    Ok(())
}
