use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::peak::PlayerPeakRepository,
    error::AppError,
    model::peak::PlayerPeak,
};

/// Tracks the daily player-count high water mark.
pub struct PeakTrackerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeakTrackerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_today_peak(&self, now: DateTime<Utc>) -> Result<i32, AppError> {
        let peak = PlayerPeakRepository::new(self.db)
            .get_today_peak(now)
            .await?;

        Ok(peak)
    }

    /// Records `observed` only when it exceeds today's current peak.
    /// Returns the new row when one was written.
    pub async fn record_if_new_peak(
        &self,
        observed: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<PlayerPeak>, AppError> {
        let repository = PlayerPeakRepository::new(self.db);

        let today_peak = repository.get_today_peak(now).await?;

        if observed <= today_peak {
            return Ok(None);
        }

        let peak = repository.record_peak(observed, now).await?;

        Ok(Some(peak))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};
    use test_utils::builder::TestBuilder;

    use super::*;

    #[tokio::test]
    async fn records_only_increasing_observations() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PlayerPeak)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let tracker = PeakTrackerService::new(db);

        for observed in [5, 12, 8, 20, 3] {
            tracker
                .record_if_new_peak(observed, Utc::now())
                .await
                .unwrap();
        }

        let counts: Vec<i32> = entity::prelude::PlayerPeak::find()
            .order_by_asc(entity::player_peak::Column::Id)
            .all(db)
            .await
            .unwrap()
            .into_iter()
            .map(|peak| peak.count)
            .collect();

        assert_eq!(counts, vec![5, 12, 20]);
        assert_eq!(tracker.get_today_peak(Utc::now()).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn equal_observation_is_not_recorded() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PlayerPeak)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let tracker = PeakTrackerService::new(db);

        let first = tracker.record_if_new_peak(10, Utc::now()).await.unwrap();
        let second = tracker.record_if_new_peak(10, Utc::now()).await.unwrap();

        assert!(first.is_some());
        assert!(second.is_none());

        let rows = entity::prelude::PlayerPeak::find().count(db).await.unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn racing_observations_never_lower_the_peak() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PlayerPeak)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let tracker = PeakTrackerService::new(db);
        let now = Utc::now();

        // Two simultaneous observations of the same count. A losing
        // interleaving may insert a redundant row, but the derived max
        // must still be the observed value.
        let (first, second) = tokio::join!(
            tracker.record_if_new_peak(30, now),
            tracker.record_if_new_peak(30, now)
        );

        first.unwrap();
        second.unwrap();

        assert_eq!(tracker.get_today_peak(now).await.unwrap(), 30);

        let rows = entity::prelude::PlayerPeak::find()
            .all(db)
            .await
            .unwrap();

        assert!(!rows.is_empty());
        assert!(rows.iter().all(|peak| peak.count == 30));
    }

    #[tokio::test]
    async fn zero_observation_on_empty_day_is_not_recorded() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PlayerPeak)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let tracker = PeakTrackerService::new(db);

        let recorded = tracker.record_if_new_peak(0, Utc::now()).await.unwrap();

        assert!(recorded.is_none());

        let rows = entity::prelude::PlayerPeak::find().count(db).await.unwrap();
        assert_eq!(rows, 0);
    }
}
