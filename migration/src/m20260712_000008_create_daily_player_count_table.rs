use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyPlayerCount::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyPlayerCount::Id))
                    .col(integer(DailyPlayerCount::Count))
                    .col(integer(DailyPlayerCount::Percentage))
                    .col(
                        timestamp(DailyPlayerCount::Date)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyPlayerCount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DailyPlayerCount {
    Table,
    Id,
    Count,
    Percentage,
    Date,
}
