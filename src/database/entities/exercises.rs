use chrono::{DateTime, Utc};
use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ExerciseType {
    #[sea_orm(string_value = "cardio")]
    #[serde(rename = "cardio")]
    Cardio,
    #[sea_orm(string_value = "strength")]
    #[serde(rename = "strength")]
    Strength,
    #[sea_orm(string_value = "flexibility")]
    #[serde(rename = "flexibility")]
    Flexibility,
    #[sea_orm(string_value = "sports")]
    #[serde(rename = "sports")]
    Sports,
    #[sea_orm(string_value = "knees-over-toes")]
    #[serde(rename = "knees-over-toes")]
    KneesOverToes,
    #[sea_orm(string_value = "plyos")]
    #[serde(rename = "plyos")]
    Plyos,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub exercise_type: ExerciseType,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub date: Date,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
