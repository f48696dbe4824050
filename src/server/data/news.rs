use chrono::Utc;
use entity::prelude::NewsPost as NewsPostEntity;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::news::{CreateNewsPostParam, NewsPost, UpdateNewsPostParam};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All posts, newest first.
    pub async fn get_all(&self) -> Result<Vec<NewsPost>, DbErr> {
        let posts = NewsPostEntity::find()
            .order_by_desc(entity::news_post::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(posts.into_iter().map(NewsPost::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<NewsPost>, DbErr> {
        let post = NewsPostEntity::find_by_id(id).one(self.db).await?;

        Ok(post.map(NewsPost::from_entity))
    }

    pub async fn create(&self, param: CreateNewsPostParam) -> Result<NewsPost, DbErr> {
        let post = entity::news_post::ActiveModel {
            title: Set(param.title),
            content: Set(param.content),
            author: Set(param.author),
            is_anonymous: Set(param.is_anonymous),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(NewsPost::from_entity(post))
    }

    pub async fn update(&self, param: UpdateNewsPostParam) -> Result<Option<NewsPost>, DbErr> {
        let Some(post) = NewsPostEntity::find_by_id(param.id).one(self.db).await? else {
            return Ok(None);
        };

        let mut post: entity::news_post::ActiveModel = post.into();

        post.title = Set(param.title);
        post.content = Set(param.content);
        post.author = Set(param.author);
        post.is_anonymous = Set(param.is_anonymous);

        let post = post.update(self.db).await?;

        Ok(Some(NewsPost::from_entity(post)))
    }

    /// Returns false when no post with the given id existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = NewsPostEntity::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        NewsPostEntity::find().count(self.db).await
    }
}
