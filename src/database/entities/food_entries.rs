use chrono::{DateTime, Utc};
use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MealType {
    #[sea_orm(string_value = "breakfast")]
    #[serde(rename = "breakfast")]
    Breakfast,
    #[sea_orm(string_value = "lunch")]
    #[serde(rename = "lunch")]
    Lunch,
    #[sea_orm(string_value = "dinner")]
    #[serde(rename = "dinner")]
    Dinner,
    #[sea_orm(string_value = "snack")]
    #[serde(rename = "snack")]
    Snack,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub food_item_id: i32,
    pub servings: f64,
    pub meal_type: MealType,
    pub date: Date,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::food_items::Entity",
        from = "Column::FoodItemId",
        to = "super::food_items::Column::Id"
    )]
    FoodItem,
}

impl Related<super::food_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
