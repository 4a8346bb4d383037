use crate::database::entities::{SummaryRecord, summaries};
use crate::database::{DatabaseError, DatabaseResult};
use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// Summaries DAO for database operations
pub struct SummariesDao<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> SummariesDao<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    /// Delete every summary generated on `date`, returning the number removed
    pub async fn delete_for_date(&self, date: NaiveDate) -> DatabaseResult<u64> {
        let result = summaries::Entity::delete_many()
            .filter(summaries::Column::GeneratedOn.eq(date))
            .exec(self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    /// Store a summary record; the id is assigned by the database
    pub async fn insert(&self, summary: &SummaryRecord) -> DatabaseResult<()> {
        let active_model = summaries::ActiveModel {
            id: ActiveValue::NotSet,
            service_type: Set(summary.service_type.clone()),
            location: Set(summary.location.clone()),
            summary_type: Set(summary.summary_type.clone()),
            summary_text: Set(summary.summary_text.clone()),
            generated_on: Set(summary.generated_on),
        };

        summaries::Entity::insert(active_model)
            .exec_without_returning(self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(())
    }

    /// Get all summaries generated on `date` in insertion order
    pub async fn find_for_date(&self, date: NaiveDate) -> DatabaseResult<Vec<SummaryRecord>> {
        summaries::Entity::find()
            .filter(summaries::Column::GeneratedOn.eq(date))
            .order_by_asc(summaries::Column::Id)
            .all(self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }

    /// Most recent summary for a (service, summary type, location) combination
    pub async fn find_latest(
        &self,
        service_type: &str,
        summary_type: &str,
        location: &str,
    ) -> DatabaseResult<Option<SummaryRecord>> {
        summaries::Entity::find()
            .filter(summaries::Column::ServiceType.eq(service_type))
            .filter(summaries::Column::SummaryType.eq(summary_type))
            .filter(summaries::Column::Location.eq(location))
            .order_by_desc(summaries::Column::GeneratedOn)
            .order_by_desc(summaries::Column::Id)
            .one(self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }
}
