use chrono::{DateTime, Utc};

use crate::model::screenshot::ScreenshotDto;

#[derive(Clone, Debug, PartialEq)]
pub struct Screenshot {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Screenshot {
    pub fn from_entity(entity: entity::screenshot::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            image_url: entity.image_url,
            author: entity.author,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ScreenshotDto {
        ScreenshotDto {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateScreenshotParam {
    pub title: String,
    pub image_url: String,
    pub author: String,
}

/// An uploaded image file plus its optional form metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadScreenshotParam {
    pub file_name: String,
    pub data: Vec<u8>,
    pub title: Option<String>,
    pub author: Option<String>,
}
