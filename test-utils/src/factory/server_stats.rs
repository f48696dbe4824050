//! Server stats factory for creating test statistics snapshots.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a server stats snapshot with the given peak player count.
///
/// # Arguments
/// - `db` - Database connection
/// - `peak_players` - Recorded peak player count
///
/// # Returns
/// - `Ok(entity::server_stats::Model)` - Created stats entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server_stats(
    db: &DatabaseConnection,
    peak_players: i32,
) -> Result<entity::server_stats::Model, DbErr> {
    entity::server_stats::ActiveModel {
        id: ActiveValue::NotSet,
        peak_players: ActiveValue::Set(peak_players),
        max_players: ActiveValue::Set(100),
        uptime: ActiveValue::Set(99.8),
        total_players: ActiveValue::Set(1247),
        world_size: ActiveValue::Set("4.2 GB".to_string()),
        date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
