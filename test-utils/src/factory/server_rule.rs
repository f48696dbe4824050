//! Server rule factory for creating test rule entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a server rule at the given position with generated title text.
///
/// # Arguments
/// - `db` - Database connection
/// - `position` - Display order of the rule
///
/// # Returns
/// - `Ok(entity::server_rule::Model)` - Created rule entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_rule(
    db: &DatabaseConnection,
    position: i32,
) -> Result<entity::server_rule::Model, DbErr> {
    let id = next_id();
    entity::server_rule::ActiveModel {
        id: ActiveValue::NotSet,
        position: ActiveValue::Set(position),
        title: ActiveValue::Set(format!("Rule {}", id)),
        description: ActiveValue::Set("Test rule description".to_string()),
    }
    .insert(db)
    .await
}
