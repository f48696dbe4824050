use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::stats::{DailyPlayerCountRepository, ServerStatsRepository},
    error::AppError,
    model::stats::{DailyPlayerCount, MonthlyStats, ServerStats},
    service::{peak::PeakTrackerService, probe::StatusProber},
};

/// Days of history returned by the activity chart endpoint.
const ACTIVITY_WINDOW_DAYS: u64 = 7;

// Placeholder figures for the synthesized snapshot served before any stats
// row has been recorded.
const FALLBACK_UPTIME: f64 = 99.8;
const FALLBACK_TOTAL_PLAYERS: i32 = 1247;
const FALLBACK_WORLD_SIZE: &str = "4.2 GB";

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    prober: &'a dyn StatusProber,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection, prober: &'a dyn StatusProber) -> Self {
        Self { db, prober }
    }

    /// Latest recorded stats snapshot. When none has been recorded yet the
    /// response is synthesized from a live probe and today's peak so the
    /// stats page still renders.
    pub async fn get_stats(&self) -> Result<ServerStats, AppError> {
        if let Some(stats) = ServerStatsRepository::new(self.db).get_latest().await? {
            return Ok(stats);
        }

        let now = Utc::now();
        let status = self.prober.probe().await;
        let peak_today = PeakTrackerService::new(self.db).get_today_peak(now).await?;

        Ok(ServerStats {
            id: 0,
            peak_players: peak_today.max(status.player_count),
            max_players: status.max_players,
            uptime: FALLBACK_UPTIME,
            total_players: FALLBACK_TOTAL_PLAYERS,
            world_size: FALLBACK_WORLD_SIZE.to_string(),
            date: now,
        })
    }

    /// The last week of daily player counts, oldest first.
    pub async fn get_activity(&self) -> Result<Vec<DailyPlayerCount>, AppError> {
        let counts = DailyPlayerCountRepository::new(self.db)
            .get_recent(ACTIVITY_WINDOW_DAYS)
            .await?;

        Ok(counts)
    }

    /// Daily counts rolled up by calendar month. A month's player figure is
    /// its highest daily count; growth is the positive delta against the
    /// previous month.
    pub async fn get_monthly(&self) -> Result<Vec<MonthlyStats>, AppError> {
        let counts = DailyPlayerCountRepository::new(self.db).get_all().await?;

        Ok(aggregate_monthly(&counts))
    }
}

fn aggregate_monthly(counts: &[DailyPlayerCount]) -> Vec<MonthlyStats> {
    let mut peaks: BTreeMap<(i32, u32), i32> = BTreeMap::new();

    for count in counts {
        let key = (count.date.year(), count.date.month());
        let peak = peaks.entry(key).or_insert(0);

        *peak = (*peak).max(count.count);
    }

    let mut monthly = Vec::with_capacity(peaks.len());
    let mut previous = None;

    for ((year, month), players) in peaks {
        let new_players = match previous {
            Some(previous_players) if players > previous_players => players - previous_players,
            Some(_) => 0,
            None => players,
        };

        monthly.push(MonthlyStats {
            month: format!("{} {}", MONTH_NAMES[(month - 1) as usize], year),
            players,
            new_players,
        });

        previous = Some(players);
    }

    monthly
}
