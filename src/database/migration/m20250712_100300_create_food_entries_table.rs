use super::FoodEntries;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoodEntries::UserId).integer().not_null())
                    .col(ColumnDef::new(FoodEntries::FoodItemId).integer().not_null())
                    .col(ColumnDef::new(FoodEntries::Servings).double().not_null())
                    .col(
                        ColumnDef::new(FoodEntries::MealType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FoodEntries::Date).date().not_null())
                    .col(
                        ColumnDef::new(FoodEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Journal reads are always user + date (or date range)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_food_entries_user_date")
                    .table(FoodEntries::Table)
                    .col(FoodEntries::UserId)
                    .col(FoodEntries::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodEntries::Table).to_owned())
            .await
    }
}
