use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========== READINGS ==========
        // One row per device per capture instant. The composite primary key
        // enforces uniqueness by (device, timestamp) at ingestion time.
        manager
            .create_table(
                Table::create()
                    .table(Readings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Readings::DeviceId).uuid().not_null())
                    .col(
                        ColumnDef::new(Readings::CapturedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Readings::Temperature).double().not_null())
                    .col(ColumnDef::new(Readings::Tds).double().not_null())
                    .col(ColumnDef::new(Readings::Ph).double().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_readings")
                            .col(Readings::DeviceId)
                            .col(Readings::CapturedAt),
                    )
                    .to_owned(),
            )
            .await?;

        // Window queries scan by capture time regardless of device
        manager
            .create_index(
                Index::create()
                    .name("readings_captured_at_idx")
                    .table(Readings::Table)
                    .col(Readings::CapturedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Readings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Readings {
    Table,
    DeviceId,
    CapturedAt,
    Temperature,
    Tds,
    Ph,
}
