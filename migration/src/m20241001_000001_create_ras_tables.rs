use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========== RAS_DATA (raw readings) ==========
        manager
            .create_table(
                Table::create()
                    .table(RasData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RasData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RasData::Temp).string().not_null())
                    .col(ColumnDef::new(RasData::Do).string().not_null())
                    .col(ColumnDef::new(RasData::Ph).string().not_null())
                    .col(
                        ColumnDef::new(RasData::Ammonia)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(RasData::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ras_data_created_at")
                    .table(RasData::Table)
                    .col(RasData::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // ========== RAS_HISTORY (derived alerts) ==========
        // No foreign key to ras_data: alerts are not linked back to their reading.
        manager
            .create_table(
                Table::create()
                    .table(RasHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RasHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RasHistory::Title).string_len(64).not_null())
                    .col(ColumnDef::new(RasHistory::Description).text().not_null())
                    .col(ColumnDef::new(RasHistory::Value).string().not_null())
                    .col(ColumnDef::new(RasHistory::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ras_history_created_at")
                    .table(RasHistory::Table)
                    .col(RasHistory::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RasHistory::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RasData::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RasData {
    Table,
    Id,
    Temp,
    Do,
    Ph,
    Ammonia,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RasHistory {
    Table,
    Id,
    Title,
    Description,
    Value,
    CreatedAt,
}
