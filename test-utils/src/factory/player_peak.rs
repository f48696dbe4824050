//! Player peak factory for creating test peak records.
//!
//! The factory derives `record_date` from the configured timestamp so that a
//! peak backdated into yesterday lands on yesterday's calendar day, matching
//! how the application records peaks.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test player peaks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{Duration, Utc};
/// use test_utils::factory::player_peak::PlayerPeakFactory;
///
/// let peak = PlayerPeakFactory::new(&db)
///     .count(30)
///     .timestamp(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct PlayerPeakFactory<'a> {
    db: &'a DatabaseConnection,
    count: i32,
    timestamp: DateTime<Utc>,
}

impl<'a> PlayerPeakFactory<'a> {
    /// Creates a new PlayerPeakFactory with default values.
    ///
    /// Defaults:
    /// - count: `10`
    /// - timestamp: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            count: 10,
            timestamp: Utc::now(),
        }
    }

    /// Sets the observed player count.
    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    /// Sets the observation timestamp. The record date follows the
    /// timestamp's UTC calendar day.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the player peak entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player_peak::Model)` - Created player peak entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player_peak::Model, DbErr> {
        entity::player_peak::ActiveModel {
            id: ActiveValue::NotSet,
            count: ActiveValue::Set(self.count),
            record_date: ActiveValue::Set(self.timestamp.date_naive()),
            timestamp: ActiveValue::Set(self.timestamp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player peak with the given count, timestamped now.
///
/// Shorthand for `PlayerPeakFactory::new(db).count(count).build().await`.
pub async fn create_peak(
    db: &DatabaseConnection,
    count: i32,
) -> Result<entity::player_peak::Model, DbErr> {
    PlayerPeakFactory::new(db).count(count).build().await
}
