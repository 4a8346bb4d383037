use crate::database::entities::{FeedbackRecord, Sentiment, feedback};
use crate::database::{DatabaseError, DatabaseResult};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

/// Feedback query parameters; every present field is AND-combined
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeedbackFilter {
    pub service_type: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub issue_location: Option<String>,
}

/// Feedback DAO for database operations
pub struct FeedbackDao<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> FeedbackDao<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    /// Fetch up to `limit` review texts matching the filter.
    ///
    /// The limit applies before null and empty texts are dropped, so a segment
    /// can yield fewer than `limit` reviews even when more rows match.
    pub async fn find_review_texts(
        &self,
        filter: &FeedbackFilter,
        limit: u64,
    ) -> DatabaseResult<Vec<String>> {
        let mut select = feedback::Entity::find()
            .select_only()
            .column(feedback::Column::ReviewText);

        if let Some(ref service_type) = filter.service_type {
            select = select.filter(feedback::Column::ServiceType.eq(service_type.as_str()));
        }
        match filter.sentiment {
            Some(Sentiment::Positive) => {
                select = select.filter(feedback::Column::PositiveFlag.eq(true));
            }
            Some(Sentiment::Negative) => {
                select = select.filter(feedback::Column::NegativeFlag.eq(true));
            }
            None => {}
        }
        if let Some(ref location) = filter.issue_location {
            select = select.filter(feedback::Column::IssueLocation.eq(location.as_str()));
        }

        let texts: Vec<Option<String>> = select
            .order_by_asc(feedback::Column::Id)
            .limit(Some(limit))
            .into_tuple()
            .all(self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(texts
            .into_iter()
            .flatten()
            .filter(|text| !text.is_empty())
            .collect())
    }

    /// Distinct non-null, non-empty issue locations in ascending order.
    ///
    /// Empty-string locations are skipped as well as NULL ones, so no segment
    /// gets a blank location label even when feedback rows carry `""`.
    pub async fn distinct_locations(&self) -> DatabaseResult<Vec<String>> {
        let locations: Vec<String> = feedback::Entity::find()
            .select_only()
            .column(feedback::Column::IssueLocation)
            .distinct()
            .filter(feedback::Column::IssueLocation.is_not_null())
            .filter(feedback::Column::IssueLocation.ne(""))
            .order_by_asc(feedback::Column::IssueLocation)
            .into_tuple()
            .all(self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(locations)
    }

    /// Store a feedback record
    pub async fn insert(&self, record: &FeedbackRecord) -> DatabaseResult<()> {
        let active_model = feedback::ActiveModel {
            id: Set(record.id.clone()),
            review_text: Set(record.review_text.clone()),
            service_type: Set(record.service_type.clone()),
            review_rating: Set(record.review_rating),
            positive_flag: Set(record.positive_flag),
            negative_flag: Set(record.negative_flag),
            issue_location: Set(record.issue_location.clone()),
        };

        feedback::Entity::insert(active_model)
            .exec_without_returning(self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(())
    }
}
