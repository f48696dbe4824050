use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerPeak::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerPeak::Id))
                    .col(integer(PlayerPeak::Count))
                    .col(date(PlayerPeak::RecordDate))
                    .col(
                        timestamp(PlayerPeak::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerPeak::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerPeak {
    Table,
    Id,
    Count,
    RecordDate,
    Timestamp,
}
