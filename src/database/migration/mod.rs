use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20250612_090000_create_feedback_table;
mod m20250612_090100_create_summaries_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_090000_create_feedback_table::Migration),
            Box::new(m20250612_090100_create_summaries_table::Migration),
        ]
    }
}

/// Common table and column identifiers
#[derive(Iden)]
pub enum Feedback {
    Table,
    Id,
    ReviewText,
    ServiceType,
    ReviewRating,
    PositiveFlag,
    NegativeFlag,
    IssueLocation,
}

#[derive(Iden)]
pub enum Summaries {
    Table,
    Id,
    ServiceType,
    Location,
    SummaryType,
    SummaryText,
    GeneratedOn,
}
