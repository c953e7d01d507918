use crate::database::entities::{
    FoodEntryRecord, FoodItemRecord, FoodItems, food_entries, food_entries::MealType, food_items,
};
use crate::database::{DatabaseError, DatabaseResult};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

/// A journal entry joined with its food item's per-serving macros.
/// Feeds the daily rollup; the macro columns come from the left join and
/// are absent when the referenced item is gone.
#[derive(Debug, FromQueryResult)]
pub struct NutritionRow {
    pub date: NaiveDate,
    pub servings: f64,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

/// Food items and journal entries DAO
#[derive(Clone)]
pub struct FoodDao {
    db: DatabaseConnection,
}

impl FoodDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a food item and return it with its assigned id
    pub async fn insert_item(&self, item: &FoodItemRecord) -> DatabaseResult<FoodItemRecord> {
        let active_model = food_items::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: Set(item.user_id),
            name: Set(item.name.clone()),
            calories: Set(item.calories),
            protein: Set(item.protein),
            carbs: Set(item.carbs),
            fat: Set(item.fat),
            serving_size: Set(item.serving_size.clone()),
            is_custom: Set(item.is_custom),
            created_at: Set(item.created_at),
        };

        let created = active_model
            .insert(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(created)
    }

    /// Find a food item by id
    pub async fn find_item(&self, item_id: i32) -> DatabaseResult<Option<FoodItemRecord>> {
        let item = food_items::Entity::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(item)
    }

    /// Insert a journal entry and return it with its assigned id
    pub async fn insert_entry(&self, entry: &FoodEntryRecord) -> DatabaseResult<FoodEntryRecord> {
        let active_model = food_entries::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: Set(entry.user_id),
            food_item_id: Set(entry.food_item_id),
            servings: Set(entry.servings),
            meal_type: Set(entry.meal_type),
            date: Set(entry.date),
            created_at: Set(entry.created_at),
        };

        let created = active_model
            .insert(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(created)
    }

    /// Get a user's entries for one date, newest first, with the joined item
    pub async fn entries_for_date(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> DatabaseResult<Vec<(FoodEntryRecord, Option<FoodItemRecord>)>> {
        let entries = food_entries::Entity::find()
            .find_also_related(FoodItems)
            .filter(food_entries::Column::UserId.eq(user_id))
            .filter(food_entries::Column::Date.eq(date))
            .order_by_desc(food_entries::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(entries)
    }

    /// Get a user's entries across a date range, newest first
    pub async fn entries_for_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<(FoodEntryRecord, Option<FoodItemRecord>)>> {
        let entries = food_entries::Entity::find()
            .find_also_related(FoodItems)
            .filter(food_entries::Column::UserId.eq(user_id))
            .filter(food_entries::Column::Date.gte(start))
            .filter(food_entries::Column::Date.lte(end))
            .order_by_desc(food_entries::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(entries)
    }

    /// Update servings and/or meal type of an owned entry.
    /// Returns `None` when the entry does not exist or belongs to someone
    /// else.
    pub async fn update_entry(
        &self,
        user_id: i32,
        entry_id: i32,
        servings: Option<f64>,
        meal_type: Option<MealType>,
    ) -> DatabaseResult<Option<FoodEntryRecord>> {
        let existing = food_entries::Entity::find()
            .filter(food_entries::Column::Id.eq(entry_id))
            .filter(food_entries::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        // Nothing to change; an empty update is a DbErr
        if servings.is_none() && meal_type.is_none() {
            return Ok(Some(existing));
        }

        let mut active_model = food_entries::ActiveModel {
            id: Set(existing.id),
            ..Default::default()
        };
        if let Some(servings) = servings {
            active_model.servings = Set(servings);
        }
        if let Some(meal_type) = meal_type {
            active_model.meal_type = Set(meal_type);
        }

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(Some(updated))
    }

    /// Delete an owned entry; returns the number of rows removed
    pub async fn delete_entry(&self, user_id: i32, entry_id: i32) -> DatabaseResult<u64> {
        let result = food_entries::Entity::delete_many()
            .filter(food_entries::Column::Id.eq(entry_id))
            .filter(food_entries::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    /// Entry-with-macros projection across a date range, for the rollup
    pub async fn nutrition_for_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<NutritionRow>> {
        let rows = food_entries::Entity::find()
            .select_only()
            .column(food_entries::Column::Date)
            .column(food_entries::Column::Servings)
            .column_as(food_items::Column::Calories, "calories")
            .column_as(food_items::Column::Protein, "protein")
            .column_as(food_items::Column::Carbs, "carbs")
            .column_as(food_items::Column::Fat, "fat")
            .join(JoinType::LeftJoin, food_entries::Relation::FoodItem.def())
            .filter(food_entries::Column::UserId.eq(user_id))
            .filter(food_entries::Column::Date.gte(start))
            .filter(food_entries::Column::Date.lte(end))
            .into_model::<NutritionRow>()
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(rows)
    }
}
