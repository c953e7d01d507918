use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20250712_100000_create_users_table;
mod m20250712_100100_create_user_profiles_table;
mod m20250712_100200_create_food_items_table;
mod m20250712_100300_create_food_entries_table;
mod m20250712_100400_create_exercises_table;
mod m20250712_100500_create_weight_entries_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250712_100000_create_users_table::Migration),
            Box::new(m20250712_100100_create_user_profiles_table::Migration),
            Box::new(m20250712_100200_create_food_items_table::Migration),
            Box::new(m20250712_100300_create_food_entries_table::Migration),
            Box::new(m20250712_100400_create_exercises_table::Migration),
            Box::new(m20250712_100500_create_weight_entries_table::Migration),
        ]
    }
}

/// Common table and column identifiers
#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum UserProfiles {
    Table,
    Id,
    UserId,
    Age,
    Gender,
    HeightCm,
    WeightKg,
    ActivityLevel,
    Goal,
    TargetWeight,
    UnitSystem,
    UseCustomMacros,
    CustomCalories,
    CustomProtein,
    CustomCarbs,
    CustomFat,
    UpdatedAt,
}

#[derive(Iden)]
pub enum FoodItems {
    Table,
    Id,
    UserId,
    Name,
    Calories,
    Protein,
    Carbs,
    Fat,
    ServingSize,
    IsCustom,
    CreatedAt,
}

#[derive(Iden)]
pub enum FoodEntries {
    Table,
    Id,
    UserId,
    FoodItemId,
    Servings,
    MealType,
    Date,
    CreatedAt,
}

#[derive(Iden)]
pub enum Exercises {
    Table,
    Id,
    UserId,
    Name,
    ExerciseType,
    DurationMinutes,
    CaloriesBurned,
    Date,
    Notes,
    CreatedAt,
}

#[derive(Iden)]
pub enum WeightEntries {
    Table,
    Id,
    UserId,
    WeightKg,
    Date,
    Notes,
    CreatedAt,
}
