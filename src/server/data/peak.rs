use chrono::{DateTime, Utc};
use entity::prelude::PlayerPeak as PlayerPeakEntity;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{model::peak::PlayerPeak, util::time::utc_day_bounds};

pub struct PlayerPeakRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerPeakRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Highest player count recorded during the UTC day containing `now`,
    /// or 0 when no row exists yet for that day.
    pub async fn get_today_peak(&self, now: DateTime<Utc>) -> Result<i32, DbErr> {
        let (start, end) = utc_day_bounds(now);

        let peak = PlayerPeakEntity::find()
            .filter(entity::player_peak::Column::Timestamp.gte(start))
            .filter(entity::player_peak::Column::Timestamp.lt(end))
            .order_by_desc(entity::player_peak::Column::Count)
            .one(self.db)
            .await?;

        Ok(peak.map(|peak| peak.count).unwrap_or(0))
    }

    /// Appends a new peak row. Existing rows are never updated; history is
    /// kept so a day's peak can always be recomputed.
    pub async fn record_peak(
        &self,
        count: i32,
        now: DateTime<Utc>,
    ) -> Result<PlayerPeak, DbErr> {
        let peak = entity::player_peak::ActiveModel {
            count: Set(count),
            record_date: Set(now.date_naive()),
            timestamp: Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlayerPeak::from_entity(peak))
    }
}
