use super::FoodItems;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Null owner marks a shared default food
                    .col(ColumnDef::new(FoodItems::UserId).integer().null())
                    .col(ColumnDef::new(FoodItems::Name).string().not_null())
                    .col(ColumnDef::new(FoodItems::Calories).double().not_null())
                    .col(ColumnDef::new(FoodItems::Protein).double().not_null())
                    .col(ColumnDef::new(FoodItems::Carbs).double().not_null())
                    .col(ColumnDef::new(FoodItems::Fat).double().not_null())
                    .col(ColumnDef::new(FoodItems::ServingSize).string().not_null())
                    .col(
                        ColumnDef::new(FoodItems::IsCustom)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FoodItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_food_items_user_id")
                    .table(FoodItems::Table)
                    .col(FoodItems::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodItems::Table).to_owned())
            .await
    }
}
