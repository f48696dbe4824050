use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    model::status::StatusSummary,
    service::{peak::PeakTrackerService, probe::StatusProber},
};

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
    prober: &'a dyn StatusProber,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection, prober: &'a dyn StatusProber) -> Self {
        Self { db, prober }
    }

    /// Probes the server, records a new daily peak when warranted and
    /// returns the combined summary. This never fails: probe errors show
    /// up as an offline status and persistence errors degrade to a
    /// best-effort response.
    pub async fn get_status(&self) -> StatusSummary {
        let now = Utc::now();
        let status = self.prober.probe().await;
        let tracker = PeakTrackerService::new(self.db);

        if status.is_online && status.player_count > 0 {
            if let Err(err) = tracker.record_if_new_peak(status.player_count, now).await {
                tracing::error!("Failed to record player peak: {}", err);
            }
        }

        let peak_today = match tracker.get_today_peak(now).await {
            Ok(peak) => peak,
            Err(err) => {
                tracing::error!("Failed to load today's player peak: {}", err);

                0
            }
        };

        StatusSummary {
            is_online: status.is_online,
            player_count: status.player_count,
            max_players: status.max_players,
            // The live count may not have landed in the database yet
            peak_today: peak_today.max(status.player_count),
            version: status.version,
        }
    }
}
