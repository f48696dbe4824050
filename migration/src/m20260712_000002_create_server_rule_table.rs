use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerRule::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerRule::Id))
                    .col(integer(ServerRule::Position))
                    .col(string(ServerRule::Title))
                    .col(text(ServerRule::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerRule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerRule {
    Table,
    Id,
    Position,
    Title,
    Description,
}
