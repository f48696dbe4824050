use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Screenshot::Table)
                    .if_not_exists()
                    .col(pk_auto(Screenshot::Id))
                    .col(string(Screenshot::Title))
                    .col(string(Screenshot::ImageUrl))
                    .col(string(Screenshot::Author))
                    .col(
                        timestamp(Screenshot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Screenshot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Screenshot {
    Table,
    Id,
    Title,
    ImageUrl,
    Author,
    CreatedAt,
}
