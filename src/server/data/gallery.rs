use entity::prelude::GalleryImage as GalleryImageEntity;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::content::{CreateGalleryImageParam, GalleryImage};

pub struct GalleryImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<GalleryImage>, DbErr> {
        let images = GalleryImageEntity::find()
            .order_by_asc(entity::gallery_image::Column::Position)
            .all(self.db)
            .await?;

        Ok(images.into_iter().map(GalleryImage::from_entity).collect())
    }

    pub async fn create(&self, param: CreateGalleryImageParam) -> Result<GalleryImage, DbErr> {
        let image = entity::gallery_image::ActiveModel {
            position: Set(param.position),
            title: Set(param.title),
            image_url: Set(param.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GalleryImage::from_entity(image))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        GalleryImageEntity::find().count(self.db).await
    }
}
