use crate::database::entities::{ProfileRecord, user_profiles};
use crate::database::{DatabaseError, DatabaseResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use sea_orm_migration::sea_query::OnConflict;

/// User profiles DAO for database operations
#[derive(Clone)]
pub struct ProfilesDao {
    db: DatabaseConnection,
}

impl ProfilesDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create or update the profile for a user using native upsert
    pub async fn upsert(&self, profile: &ProfileRecord) -> DatabaseResult<ProfileRecord> {
        let active_model = user_profiles::ActiveModel {
            id: ActiveValue::NotSet, // Let database auto-assign ID
            user_id: Set(profile.user_id),
            age: Set(profile.age),
            gender: Set(profile.gender),
            height_cm: Set(profile.height_cm),
            weight_kg: Set(profile.weight_kg),
            activity_level: Set(profile.activity_level),
            goal: Set(profile.goal),
            target_weight: Set(profile.target_weight),
            unit_system: Set(profile.unit_system),
            use_custom_macros: Set(profile.use_custom_macros),
            custom_calories: Set(profile.custom_calories),
            custom_protein: Set(profile.custom_protein),
            custom_carbs: Set(profile.custom_carbs),
            custom_fat: Set(profile.custom_fat),
            updated_at: Set(profile.updated_at),
        };

        let on_conflict = OnConflict::column(user_profiles::Column::UserId)
            .update_columns([
                user_profiles::Column::Age,
                user_profiles::Column::Gender,
                user_profiles::Column::HeightCm,
                user_profiles::Column::WeightKg,
                user_profiles::Column::ActivityLevel,
                user_profiles::Column::Goal,
                user_profiles::Column::TargetWeight,
                user_profiles::Column::UnitSystem,
                user_profiles::Column::UseCustomMacros,
                user_profiles::Column::CustomCalories,
                user_profiles::Column::CustomProtein,
                user_profiles::Column::CustomCarbs,
                user_profiles::Column::CustomFat,
                user_profiles::Column::UpdatedAt,
            ])
            .to_owned();

        user_profiles::Entity::insert(active_model)
            .on_conflict(on_conflict)
            .exec(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        self.find_by_user(profile.user_id)
            .await?
            .ok_or(DatabaseError::NotFound)
    }

    /// Find the profile for a user
    pub async fn find_by_user(&self, user_id: i32) -> DatabaseResult<Option<ProfileRecord>> {
        let profile = user_profiles::Entity::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(profile)
    }

    /// Copy the latest logged weight onto the profile, if one exists
    pub async fn update_weight(&self, user_id: i32, weight_kg: f64) -> DatabaseResult<()> {
        let Some(profile) = self.find_by_user(user_id).await? else {
            return Ok(());
        };

        let active_model = user_profiles::ActiveModel {
            id: Set(profile.id),
            weight_kg: Set(weight_kg),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        active_model
            .update(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(())
    }
}
