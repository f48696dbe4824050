use chrono::{DateTime, NaiveDate, Utc};

/// One observed player-count high water mark. Rows are append-only; the
/// authoritative peak for a day is the maximum `count` among its rows.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerPeak {
    pub id: i32,
    pub count: i32,
    pub record_date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

impl PlayerPeak {
    pub fn from_entity(entity: entity::player_peak::Model) -> Self {
        Self {
            id: entity.id,
            count: entity.count,
            record_date: entity.record_date,
            timestamp: entity.timestamp,
        }
    }
}
