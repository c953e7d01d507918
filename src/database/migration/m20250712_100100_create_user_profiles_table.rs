use super::UserProfiles;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::UserId).integer().not_null())
                    .col(ColumnDef::new(UserProfiles::Age).integer().not_null())
                    .col(
                        ColumnDef::new(UserProfiles::Gender)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserProfiles::HeightCm).double().not_null())
                    .col(ColumnDef::new(UserProfiles::WeightKg).double().not_null())
                    .col(
                        ColumnDef::new(UserProfiles::ActivityLevel)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserProfiles::Goal).string_len(16).not_null())
                    .col(ColumnDef::new(UserProfiles::TargetWeight).double().null())
                    .col(
                        ColumnDef::new(UserProfiles::UnitSystem)
                            .string_len(16)
                            .not_null()
                            .default("metric"),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UseCustomMacros)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CustomCalories)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CustomProtein)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CustomCarbs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CustomFat)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One profile per user; the upsert conflicts on this index
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_profiles_user_id")
                    .table(UserProfiles::Table)
                    .col(UserProfiles::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}
