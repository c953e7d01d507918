use crate::database::entities::{ExerciseEntry, exercises};
use crate::database::{DatabaseError, DatabaseResult};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

/// Exercise journal DAO
#[derive(Clone)]
pub struct ExercisesDao {
    db: DatabaseConnection,
}

impl ExercisesDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an exercise session and return it with its assigned id
    pub async fn insert(&self, entry: &ExerciseEntry) -> DatabaseResult<ExerciseEntry> {
        let active_model = exercises::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: Set(entry.user_id),
            name: Set(entry.name.clone()),
            exercise_type: Set(entry.exercise_type),
            duration_minutes: Set(entry.duration_minutes),
            calories_burned: Set(entry.calories_burned),
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

    /// Get a user's sessions for one date, newest first
    pub async fn for_date(&self, user_id: i32, date: NaiveDate) -> DatabaseResult<Vec<ExerciseEntry>> {
        let entries = exercises::Entity::find()
            .filter(exercises::Column::UserId.eq(user_id))
            .filter(exercises::Column::Date.eq(date))
            .order_by_desc(exercises::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(entries)
    }

    /// Get a user's sessions across a date range, newest first
    pub async fn for_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<ExerciseEntry>> {
        let entries = exercises::Entity::find()
            .filter(exercises::Column::UserId.eq(user_id))
            .filter(exercises::Column::Date.gte(start))
            .filter(exercises::Column::Date.lte(end))
            .order_by_desc(exercises::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(entries)
    }

    /// Delete an owned session; returns the number of rows removed
    pub async fn delete(&self, user_id: i32, entry_id: i32) -> DatabaseResult<u64> {
        let result = exercises::Entity::delete_many()
            .filter(exercises::Column::Id.eq(entry_id))
            .filter(exercises::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
