use chrono::Utc;
use entity::prelude::Screenshot as ScreenshotEntity;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryOrder,
};

use crate::server::model::screenshot::{CreateScreenshotParam, Screenshot};

pub struct ScreenshotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScreenshotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All screenshots, newest first.
    pub async fn get_all(&self) -> Result<Vec<Screenshot>, DbErr> {
        let screenshots = ScreenshotEntity::find()
            .order_by_desc(entity::screenshot::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(screenshots
            .into_iter()
            .map(Screenshot::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Screenshot>, DbErr> {
        let screenshot = ScreenshotEntity::find_by_id(id).one(self.db).await?;

        Ok(screenshot.map(Screenshot::from_entity))
    }

    pub async fn create(&self, param: CreateScreenshotParam) -> Result<Screenshot, DbErr> {
        let screenshot = entity::screenshot::ActiveModel {
            title: Set(param.title),
            image_url: Set(param.image_url),
            author: Set(param.author),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Screenshot::from_entity(screenshot))
    }

    /// Deletes the row and returns the deleted screenshot so the caller can
    /// clean up the stored file. Returns None when the id does not exist.
    pub async fn delete(&self, id: i32) -> Result<Option<Screenshot>, DbErr> {
        let Some(screenshot) = ScreenshotEntity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let deleted = Screenshot::from_entity(screenshot.clone());

        screenshot.delete(self.db).await?;

        Ok(Some(deleted))
    }
}
