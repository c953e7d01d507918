use super::Exercises;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exercises::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exercises::UserId).integer().not_null())
                    .col(ColumnDef::new(Exercises::Name).string().not_null())
                    .col(
                        ColumnDef::new(Exercises::ExerciseType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Exercises::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Exercises::CaloriesBurned)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Exercises::Date).date().not_null())
                    .col(ColumnDef::new(Exercises::Notes).string().null())
                    .col(
                        ColumnDef::new(Exercises::CreatedAt)
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
                    .name("idx_exercises_user_date")
                    .table(Exercises::Table)
                    .col(Exercises::UserId)
                    .col(Exercises::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercises::Table).to_owned())
            .await
    }
}
