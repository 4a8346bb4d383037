pub mod check;
pub mod migrate;
pub mod run;
pub mod show;

use crate::Config;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate today's summaries (default when no command is given)
    Run {
        #[arg(
            long,
            help = "Dry run - list segments and review counts without calling the model or writing"
        )]
        dry_run: bool,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: migrate::MigrateAction,
    },
    /// Print the most recent stored summary for a segment
    Show {
        #[arg(long, help = "Service name, e.g. \"ATM\" or \"Overall\"")]
        service: String,

        #[arg(long, help = "Summary type (Overall, Positive, Negative)")]
        summary_type: crate::summarization::SummaryType,

        #[arg(long, help = "Issue location (defaults to all locations)")]
        location: Option<String>,
    },
    /// Check connectivity to the database and the Ollama endpoint
    Check,
}

pub async fn handle_command(
    command: Commands,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Run { dry_run } => run::handle_run_command(dry_run, config).await,
        Commands::Migrate { action } => migrate::handle_migrate_command(action, config).await,
        Commands::Show {
            service,
            summary_type,
            location,
        } => show::handle_show_command(&service, summary_type, location.as_deref(), config).await,
        Commands::Check => check::handle_check_command(config).await,
    }
}
