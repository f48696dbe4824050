//! Background polling of the Minecraft server.
//!
//! Two jobs run on UTC cron schedules: a peak tick every 15 minutes that
//! records new daily player peaks and raises the stats snapshot's all-time
//! peak, and a midnight job that stores the player count observed at the
//! day boundary, stamped with the new day's date. Tick bodies are plain
//! functions so they can be exercised directly in tests.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::stats::{DailyPlayerCountRepository, ServerStatsRepository},
    error::AppError,
    model::stats::CreateDailyCountParam,
    service::{peak::PeakTrackerService, probe::StatusProber},
};

const PEAK_TICK_SCHEDULE: &str = "0 */15 * * * *";
const DAILY_SNAPSHOT_SCHEDULE: &str = "0 0 0 * * *";

pub async fn start_scheduler(
    db: DatabaseConnection,
    prober: Arc<dyn StatusProber>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let tick_db = db.clone();
    let tick_prober = prober.clone();

    scheduler
        .add(Job::new_async(PEAK_TICK_SCHEDULE, move |_uuid, _lock| {
            let db = tick_db.clone();
            let prober = tick_prober.clone();

            Box::pin(async move {
                if let Err(err) = run_peak_tick(&db, prober.as_ref()).await {
                    tracing::error!("Error recording player peak: {}", err);
                }
            })
        })?)
        .await?;

    scheduler
        .add(Job::new_async(
            DAILY_SNAPSHOT_SCHEDULE,
            move |_uuid, _lock| {
                let db = db.clone();
                let prober = prober.clone();

                Box::pin(async move {
                    if let Err(err) = run_daily_snapshot(&db, prober.as_ref()).await {
                        tracing::error!("Error recording daily snapshot: {}", err);
                    }
                })
            },
        )?)
        .await?;

    scheduler.start().await?;

    tracing::info!("Status polling scheduler started");

    Ok(scheduler)
}

/// Probes the server and records the observed player count when it beats
/// today's peak. Offline or empty servers leave the database untouched.
pub async fn run_peak_tick(
    db: &DatabaseConnection,
    prober: &dyn StatusProber,
) -> Result<(), AppError> {
    let status = prober.probe().await;

    if !status.is_online || status.player_count <= 0 {
        return Ok(());
    }

    if let Some(peak) = PeakTrackerService::new(db)
        .record_if_new_peak(status.player_count, Utc::now())
        .await?
    {
        tracing::info!(count = peak.count, "Recorded new daily player peak");
    }

    if let Some(stats) = ServerStatsRepository::new(db)
        .raise_peak(status.player_count)
        .await?
    {
        tracing::info!(
            peak_players = stats.peak_players,
            "Raised all-time peak on stats snapshot"
        );
    }

    Ok(())
}

/// Stores a daily player-count sample for the activity chart, stamped with
/// the current date. Skipped when the server is offline, since there is no
/// meaningful count.
pub async fn run_daily_snapshot(
    db: &DatabaseConnection,
    prober: &dyn StatusProber,
) -> Result<(), AppError> {
    let status = prober.probe().await;

    if !status.is_online {
        return Ok(());
    }

    let percentage = if status.max_players > 0 {
        ((status.player_count as f64 / status.max_players as f64) * 100.0).round() as i32
    } else {
        0
    };

    DailyPlayerCountRepository::new(db)
        .create(CreateDailyCountParam {
            count: status.player_count,
            percentage,
            date: Utc::now(),
        })
        .await?;

    Ok(())
}
