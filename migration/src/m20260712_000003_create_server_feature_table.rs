use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerFeature::Id))
                    .col(integer(ServerFeature::Position))
                    .col(string(ServerFeature::Title))
                    .col(text(ServerFeature::Description))
                    .col(string(ServerFeature::Icon))
                    .col(string_null(ServerFeature::IconBackground))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerFeature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerFeature {
    Table,
    Id,
    Position,
    Title,
    Description,
    Icon,
    IconBackground,
}
