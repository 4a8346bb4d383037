use crate::Config;
use crate::database::migration::Migrator;
use crate::database::{DatabaseManager, DatabaseManagerImpl};
use clap::Subcommand;
use sea_orm::{ConnectionTrait, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

#[derive(Subcommand)]
pub enum MigrateAction {
    /// Create the feedback and summaries tables if missing
    Up,
    /// Roll back summarizer migrations; feedback rows are never dropped
    Down {
        #[arg(short, long, default_value = "1", help = "Number of migrations to roll back")]
        steps: u32,
    },
    /// List applied and pending migrations
    Status,
}

/// Migration names split by whether they have run against the store
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationStatusReport {
    pub applied: Vec<String>,
    pub pending: Vec<String>,
}

impl MigrationStatusReport {
    pub async fn collect<C: ConnectionTrait>(db: &C) -> Result<Self, DbErr> {
        let applied = Migrator::get_applied_migrations(db)
            .await?
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();
        let pending = Migrator::get_pending_migrations(db)
            .await?
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();

        Ok(Self { applied, pending })
    }

    pub fn print(&self) {
        println!("Applied ({}):", self.applied.len());
        for name in &self.applied {
            println!("  {}", name);
        }
        println!("Pending ({}):", self.pending.len());
        for name in &self.pending {
            println!("  {}", name);
        }
    }
}

pub async fn handle_migrate_command(
    action: MigrateAction,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let db_manager = DatabaseManagerImpl::new_from_config(&config.database).await?;
    let connection = db_manager.connection();

    match action {
        MigrateAction::Up => {
            let pending = MigrationStatusReport::collect(connection).await?.pending;
            if pending.is_empty() {
                info!("Schema is up to date");
                return Ok(());
            }
            for name in &pending {
                info!("Applying {}", name);
            }
            db_manager.migrate().await?;
        }
        MigrateAction::Down { steps } => {
            info!("Rolling back {} migration(s)", steps);
            Migrator::down(connection, Some(steps)).await?;
            let report = MigrationStatusReport::collect(connection).await?;
            info!("{} migration(s) still applied", report.applied.len());
        }
        MigrateAction::Status => {
            MigrationStatusReport::collect(connection).await?.print();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::config::DatabaseConfig;

    const FEEDBACK_MIGRATION: &str = "m20250612_090000_create_feedback_table";
    const SUMMARIES_MIGRATION: &str = "m20250612_090100_create_summaries_table";

    async fn memory_database() -> DatabaseManagerImpl {
        DatabaseManagerImpl::new_from_config(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_status_on_fresh_store_lists_everything_pending() {
        let database = memory_database().await;

        let report = MigrationStatusReport::collect(database.connection())
            .await
            .unwrap();

        assert!(report.applied.is_empty());
        assert_eq!(report.pending, vec![FEEDBACK_MIGRATION, SUMMARIES_MIGRATION]);
    }

    #[tokio::test]
    async fn test_status_tracks_up_and_down() {
        let database = memory_database().await;
        database.migrate().await.unwrap();

        let report = MigrationStatusReport::collect(database.connection())
            .await
            .unwrap();
        assert_eq!(report.applied, vec![FEEDBACK_MIGRATION, SUMMARIES_MIGRATION]);
        assert!(report.pending.is_empty());

        Migrator::down(database.connection(), Some(1)).await.unwrap();

        let report = MigrationStatusReport::collect(database.connection())
            .await
            .unwrap();
        assert_eq!(report.applied, vec![FEEDBACK_MIGRATION]);
        assert_eq!(report.pending, vec![SUMMARIES_MIGRATION]);
    }
}
