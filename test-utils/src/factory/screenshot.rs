//! Screenshot factory for creating test screenshot metadata.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a screenshot with generated title and file URL.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::screenshot::Model)` - Created screenshot entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_screenshot(
    db: &DatabaseConnection,
) -> Result<entity::screenshot::Model, DbErr> {
    let id = next_id();
    entity::screenshot::ActiveModel {
        id: ActiveValue::NotSet,
        title: ActiveValue::Set(format!("Screenshot {}", id)),
        image_url: ActiveValue::Set(format!("/uploads/screenshot-{}.png", id)),
        author: ActiveValue::Set("Anonymous".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
