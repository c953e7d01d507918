use super::WeightEntries;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeightEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeightEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WeightEntries::UserId).integer().not_null())
                    .col(ColumnDef::new(WeightEntries::WeightKg).double().not_null())
                    .col(ColumnDef::new(WeightEntries::Date).date().not_null())
                    .col(ColumnDef::new(WeightEntries::Notes).string().null())
                    .col(
                        ColumnDef::new(WeightEntries::CreatedAt)
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
                    .name("idx_weight_entries_user_date")
                    .table(WeightEntries::Table)
                    .col(WeightEntries::UserId)
                    .col(WeightEntries::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeightEntries::Table).to_owned())
            .await
    }
}
