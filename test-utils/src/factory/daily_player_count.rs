//! Daily player count factory for creating test activity samples.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a daily player count sample for the given date.
///
/// The percentage is derived from the count against a nominal capacity of 100
/// players; pass a custom value through `create_daily_count_with_percentage`
/// when the derivation matters to the test.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Online player count for the sample
/// - `date` - Sample date
///
/// # Returns
/// - `Ok(entity::daily_player_count::Model)` - Created sample entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_daily_count(
    db: &DatabaseConnection,
    count: i32,
    date: DateTime<Utc>,
) -> Result<entity::daily_player_count::Model, DbErr> {
    create_daily_count_with_percentage(db, count, count.min(100), date).await
}

/// Creates a daily player count sample with an explicit percentage.
pub async fn create_daily_count_with_percentage(
    db: &DatabaseConnection,
    count: i32,
    percentage: i32,
    date: DateTime<Utc>,
) -> Result<entity::daily_player_count::Model, DbErr> {
    entity::daily_player_count::ActiveModel {
        id: ActiveValue::NotSet,
        count: ActiveValue::Set(count),
        percentage: ActiveValue::Set(percentage),
        date: ActiveValue::Set(date),
    }
    .insert(db)
    .await
}
