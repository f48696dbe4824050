use chrono::{DateTime, Utc};

use crate::model::news::NewsPostDto;

#[derive(Clone, Debug, PartialEq)]
pub struct NewsPost {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl NewsPost {
    pub fn from_entity(entity: entity::news_post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            author: entity.author,
            is_anonymous: entity.is_anonymous,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NewsPostDto {
        NewsPostDto {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author,
            is_anonymous: self.is_anonymous,
            created_at: self.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateNewsPostParam {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub is_anonymous: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewsPostParam {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub is_anonymous: bool,
}
