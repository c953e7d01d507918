use chrono::{DateTime, Utc};
use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    #[serde(rename = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    #[serde(rename = "female")]
    Female,
    #[sea_orm(string_value = "other")]
    #[serde(rename = "other")]
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ActivityLevel {
    #[sea_orm(string_value = "sedentary")]
    #[serde(rename = "sedentary")]
    Sedentary,
    #[sea_orm(string_value = "light")]
    #[serde(rename = "light")]
    Light,
    #[sea_orm(string_value = "moderate")]
    #[serde(rename = "moderate")]
    Moderate,
    #[sea_orm(string_value = "active")]
    #[serde(rename = "active")]
    Active,
    #[sea_orm(string_value = "very-active")]
    #[serde(rename = "very-active")]
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to the basal metabolic rate.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Goal {
    #[sea_orm(string_value = "lose")]
    #[serde(rename = "lose")]
    Lose,
    #[sea_orm(string_value = "maintain")]
    #[serde(rename = "maintain")]
    Maintain,
    #[sea_orm(string_value = "gain")]
    #[serde(rename = "gain")]
    Gain,
}

impl Goal {
    /// Daily calorie adjustment relative to maintenance.
    pub fn calorie_delta(&self) -> i32 {
        match self {
            Goal::Lose => -500,
            Goal::Maintain => 0,
            Goal::Gain => 500,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[derive(Default)]
pub enum UnitSystem {
    #[sea_orm(string_value = "metric")]
    #[serde(rename = "metric")]
    #[default]
    Metric,
    #[sea_orm(string_value = "imperial")]
    #[serde(rename = "imperial")]
    Imperial,
}

/// Body stats and targets. All stored quantities are metric; the unit
/// system is a display preference echoed back to clients.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub age: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub target_weight: Option<f64>,
    #[sea_orm(column_type = "String(StringLen::N(16))", default_value = "metric")]
    pub unit_system: UnitSystem,
    pub use_custom_macros: bool,
    pub custom_calories: i32,
    pub custom_protein: i32,
    pub custom_carbs: i32,
    pub custom_fat: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
