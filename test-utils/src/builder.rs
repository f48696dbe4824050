use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{NewsPost, PlayerPeak};
///
/// let test = TestBuilder::new()
///     .with_table(NewsPost)
///     .with_table(PlayerPeak)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for status tracking operations.
    ///
    /// This convenience method adds the following tables:
    /// - PlayerPeak
    /// - ServerStats
    /// - DailyPlayerCount
    ///
    /// Use this when testing peak tracking, scheduler ticks, or stats aggregation.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_status_tables(self) -> Self {
        self.with_table(PlayerPeak)
            .with_table(ServerStats)
            .with_table(DailyPlayerCount)
    }

    /// Adds all tables backing the `/api/content` aggregate.
    ///
    /// This convenience method adds the following tables:
    /// - ServerRule
    /// - ServerFeature
    /// - GalleryImage
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_content_tables(self) -> Self {
        self.with_table(ServerRule)
            .with_table(ServerFeature)
            .with_table(GalleryImage)
    }

    /// Builds the configured test context.
    ///
    /// Creates the in-memory database connection and executes all configured
    /// CREATE TABLE statements in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test context with database ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
