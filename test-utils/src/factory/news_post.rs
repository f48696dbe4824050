//! News post factory for creating test news entities.
//!
//! This module provides factory methods for creating news post entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::news_post::NewsPostFactory;
///
/// let post = NewsPostFactory::new(&db)
///     .title("Server update")
///     .anonymous(true)
///     .build()
///     .await?;
/// ```
pub struct NewsPostFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: String,
    author: Option<String>,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NewsPostFactory<'a> {
    /// Creates a new NewsPostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"News Post {id}"` where id is auto-incremented
    /// - content: `"Test news content"`
    /// - author: `Some("Admin")`
    /// - is_anonymous: `false`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("News Post {}", id),
            content: "Test news content".to_string(),
            author: Some("Admin".to_string()),
            is_anonymous: false,
            created_at: Utc::now(),
        }
    }

    /// Sets the post title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the post content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the post author.
    pub fn author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    /// Sets whether the post is anonymous.
    pub fn anonymous(mut self, is_anonymous: bool) -> Self {
        self.is_anonymous = is_anonymous;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the news post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::news_post::Model)` - Created news post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::news_post::Model, DbErr> {
        entity::news_post::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            author: ActiveValue::Set(self.author),
            is_anonymous: ActiveValue::Set(self.is_anonymous),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news post with default values.
///
/// Shorthand for `NewsPostFactory::new(db).build().await`.
pub async fn create_news_post(db: &DatabaseConnection) -> Result<entity::news_post::Model, DbErr> {
    NewsPostFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::NewsPost;

    #[tokio::test]
    async fn creates_news_post_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(NewsPost)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let post = create_news_post(db).await?;

        assert!(!post.title.is_empty());
        assert_eq!(post.content, "Test news content");
        assert_eq!(post.author, Some("Admin".to_string()));
        assert!(!post.is_anonymous);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_posts() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(NewsPost)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_news_post(db).await?;
        let second = create_news_post(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.title, second.title);

        Ok(())
    }
}
