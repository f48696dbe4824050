//! Server feature factory for creating test feature cards.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a server feature at the given position with generated title text.
///
/// # Arguments
/// - `db` - Database connection
/// - `position` - Display order of the feature
///
/// # Returns
/// - `Ok(entity::server_feature::Model)` - Created feature entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_feature(
    db: &DatabaseConnection,
    position: i32,
) -> Result<entity::server_feature::Model, DbErr> {
    let id = next_id();
    entity::server_feature::ActiveModel {
        id: ActiveValue::NotSet,
        position: ActiveValue::Set(position),
        title: ActiveValue::Set(format!("Feature {}", id)),
        description: ActiveValue::Set("Test feature description".to_string()),
        icon: ActiveValue::Set("shield-alt".to_string()),
        icon_background: ActiveValue::Set(Some("bg-mc-green".to_string())),
    }
    .insert(db)
    .await
}
