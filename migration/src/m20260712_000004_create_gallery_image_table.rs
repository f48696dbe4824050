use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryImage::Table)
                    .if_not_exists()
                    .col(pk_auto(GalleryImage::Id))
                    .col(integer(GalleryImage::Position))
                    .col(string(GalleryImage::Title))
                    .col(string(GalleryImage::ImageUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GalleryImage {
    Table,
    Id,
    Position,
    Title,
    ImageUrl,
}
