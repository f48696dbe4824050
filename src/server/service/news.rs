use sea_orm::DatabaseConnection;

use crate::{
    model::news::CreateNewsPostDto,
    server::{
        data::news::NewsRepository,
        error::AppError,
        model::news::{CreateNewsPostParam, NewsPost, UpdateNewsPostParam},
    },
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<NewsPost>, AppError> {
        let posts = NewsRepository::new(self.db).get_all().await?;

        Ok(posts)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<NewsPost>, AppError> {
        let post = NewsRepository::new(self.db).get_by_id(id).await?;

        Ok(post)
    }

    pub async fn create(&self, payload: CreateNewsPostDto) -> Result<NewsPost, AppError> {
        let param = validate(payload)?;

        let post = NewsRepository::new(self.db)
            .create(CreateNewsPostParam {
                title: param.title,
                content: param.content,
                author: param.author,
                is_anonymous: param.is_anonymous,
            })
            .await?;

        Ok(post)
    }

    pub async fn update(
        &self,
        id: i32,
        payload: CreateNewsPostDto,
    ) -> Result<Option<NewsPost>, AppError> {
        let param = validate(payload)?;

        let post = NewsRepository::new(self.db)
            .update(UpdateNewsPostParam {
                id,
                title: param.title,
                content: param.content,
                author: param.author,
                is_anonymous: param.is_anonymous,
            })
            .await?;

        Ok(post)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = NewsRepository::new(self.db).delete(id).await?;

        Ok(deleted)
    }
}

const MAX_TITLE_LENGTH: usize = 200;

/// Normalizes and validates a news payload. Titles and content must be
/// non-empty after trimming; blank authors are treated as absent.
fn validate(payload: CreateNewsPostDto) -> Result<CreateNewsPostParam, AppError> {
    let title = payload.title.trim().to_string();

    if title.is_empty() {
        return Err(AppError::Validation {
            field: "title",
            message: "Title must not be empty".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::Validation {
            field: "title",
            message: format!("Title must be at most {} characters", MAX_TITLE_LENGTH),
        });
    }

    let content = payload.content.trim().to_string();

    if content.is_empty() {
        return Err(AppError::Validation {
            field: "content",
            message: "Content must not be empty".to_string(),
        });
    }

    let author = payload
        .author
        .map(|author| author.trim().to_string())
        .filter(|author| !author.is_empty());

    Ok(CreateNewsPostParam {
        title,
        content,
        author,
        is_anonymous: payload.is_anonymous,
    })
}
