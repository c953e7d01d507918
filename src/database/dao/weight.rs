use crate::database::entities::{WeightEntry, weight_entries};
use crate::database::{DatabaseError, DatabaseResult};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

/// Weight history DAO
#[derive(Clone)]
pub struct WeightDao {
    db: DatabaseConnection,
}

impl WeightDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a measurement and return it with its assigned id
    pub async fn insert(&self, entry: &WeightEntry) -> DatabaseResult<WeightEntry> {
        let active_model = weight_entries::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: Set(entry.user_id),
            weight_kg: Set(entry.weight_kg),
            date: Set(entry.date),
            notes: Set(entry.notes.clone()),
            created_at: Set(entry.created_at),
        };

        let created = active_model
            .insert(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(created)
    }

    /// Recent history, newest first, optionally restricted to a range
    pub async fn history(
        &self,
        user_id: i32,
        range: Option<(NaiveDate, NaiveDate)>,
        limit: u64,
    ) -> DatabaseResult<Vec<WeightEntry>> {
        let mut select = weight_entries::Entity::find()
            .filter(weight_entries::Column::UserId.eq(user_id))
            .order_by_desc(weight_entries::Column::Date);

        if let Some((start, end)) = range {
            select = select
                .filter(weight_entries::Column::Date.gte(start))
                .filter(weight_entries::Column::Date.lte(end));
        }

        let entries = select
            .limit(Some(limit))
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(entries)
    }

    /// Range query for the rollup, ascending by date then insertion order
    /// so the newest row for a repeated date lands last.
    pub async fn for_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<WeightEntry>> {
        let entries = weight_entries::Entity::find()
            .filter(weight_entries::Column::UserId.eq(user_id))
            .filter(weight_entries::Column::Date.gte(start))
            .filter(weight_entries::Column::Date.lte(end))
            .order_by_asc(weight_entries::Column::Date)
            .order_by_asc(weight_entries::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(entries)
    }

    /// Delete an owned measurement; returns the number of rows removed
    pub async fn delete(&self, user_id: i32, entry_id: i32) -> DatabaseResult<u64> {
        let result = weight_entries::Entity::delete_many()
            .filter(weight_entries::Column::Id.eq(entry_id))
            .filter(weight_entries::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
