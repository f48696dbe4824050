use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerStats::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerStats::Id))
                    .col(integer(ServerStats::PeakPlayers))
                    .col(integer(ServerStats::MaxPlayers))
                    .col(double(ServerStats::Uptime))
                    .col(integer(ServerStats::TotalPlayers))
                    .col(string(ServerStats::WorldSize))
                    .col(
                        timestamp(ServerStats::Date)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerStats {
    Table,
    Id,
    PeakPlayers,
    MaxPlayers,
    Uptime,
    TotalPlayers,
    WorldSize,
    Date,
}
