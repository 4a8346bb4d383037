use super::Feedback;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Deployments that already own a populated feedback table keep it as is
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedback::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedback::ReviewText).text().null())
                    .col(ColumnDef::new(Feedback::ServiceType).string().null())
                    .col(ColumnDef::new(Feedback::ReviewRating).integer().null())
                    .col(
                        ColumnDef::new(Feedback::PositiveFlag)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Feedback::NegativeFlag)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Feedback::IssueLocation).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_feedback_service_type")
                    .table(Feedback::Table)
                    .col(Feedback::ServiceType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_feedback_issue_location")
                    .table(Feedback::Table)
                    .col(Feedback::IssueLocation)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    /// Leaves the feedback table and its rows in place.
    ///
    /// Feedback is written by the ingesting backend and only read here, so
    /// rolling back the summarizer schema never removes it.
    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
