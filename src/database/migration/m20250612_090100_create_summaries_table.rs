use super::Summaries;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Summaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Summaries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Summaries::ServiceType).string().not_null())
                    .col(ColumnDef::new(Summaries::Location).string().not_null())
                    .col(ColumnDef::new(Summaries::SummaryType).string().not_null())
                    .col(ColumnDef::new(Summaries::SummaryText).text().not_null())
                    .col(ColumnDef::new(Summaries::GeneratedOn).date().not_null())
                    .to_owned(),
            )
            .await?;

        // Not unique: a discovered location literally named "All" shares its key
        // with the all-locations pass
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_summaries_lookup")
                    .table(Summaries::Table)
                    .col(Summaries::ServiceType)
                    .col(Summaries::SummaryType)
                    .col(Summaries::Location)
                    .col(Summaries::GeneratedOn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_summaries_generated_on")
                    .table(Summaries::Table)
                    .col(Summaries::GeneratedOn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Summaries::Table).to_owned())
            .await
    }
}
