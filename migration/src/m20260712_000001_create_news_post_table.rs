use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsPost::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsPost::Id))
                    .col(string(NewsPost::Title))
                    .col(text(NewsPost::Content))
                    .col(string_null(NewsPost::Author))
                    .col(boolean(NewsPost::IsAnonymous).default(false))
                    .col(
                        timestamp(NewsPost::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsPost {
    Table,
    Id,
    Title,
    Content,
    Author,
    IsAnonymous,
    CreatedAt,
}
