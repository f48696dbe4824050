use entity::prelude::{DailyPlayerCount as DailyPlayerCountEntity, ServerStats as ServerStatsEntity};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::stats::{
    CreateDailyCountParam, CreateServerStatsParam, DailyPlayerCount, ServerStats,
};

pub struct ServerStatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerStatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Most recent stats snapshot, if one has been recorded.
    pub async fn get_latest(&self) -> Result<Option<ServerStats>, DbErr> {
        let stats = ServerStatsEntity::find()
            .order_by_desc(entity::server_stats::Column::Date)
            .one(self.db)
            .await?;

        Ok(stats.map(ServerStats::from_entity))
    }

    pub async fn create(&self, param: CreateServerStatsParam) -> Result<ServerStats, DbErr> {
        let stats = entity::server_stats::ActiveModel {
            peak_players: Set(param.peak_players),
            max_players: Set(param.max_players),
            uptime: Set(param.uptime),
            total_players: Set(param.total_players),
            world_size: Set(param.world_size),
            date: Set(param.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ServerStats::from_entity(stats))
    }

    /// Raises the recorded peak on the latest snapshot when `observed`
    /// exceeds it. Returns the updated snapshot when a write happened;
    /// None when nothing changed or no snapshot exists yet.
    pub async fn raise_peak(&self, observed: i32) -> Result<Option<ServerStats>, DbErr> {
        let Some(latest) = ServerStatsEntity::find()
            .order_by_desc(entity::server_stats::Column::Date)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if observed <= latest.peak_players {
            return Ok(None);
        }

        let mut latest: entity::server_stats::ActiveModel = latest.into();

        latest.peak_players = Set(observed);

        let updated = latest.update(self.db).await?;

        Ok(Some(ServerStats::from_entity(updated)))
    }
}

pub struct DailyPlayerCountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DailyPlayerCountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The most recent `days` snapshots, ordered oldest to newest for
    /// charting.
    pub async fn get_recent(&self, days: u64) -> Result<Vec<DailyPlayerCount>, DbErr> {
        let mut counts = DailyPlayerCountEntity::find()
            .order_by_desc(entity::daily_player_count::Column::Date)
            .limit(days)
            .all(self.db)
            .await?;

        counts.reverse();

        Ok(counts
            .into_iter()
            .map(DailyPlayerCount::from_entity)
            .collect())
    }

    /// Full history, oldest first. Used for monthly aggregation.
    pub async fn get_all(&self) -> Result<Vec<DailyPlayerCount>, DbErr> {
        let counts = DailyPlayerCountEntity::find()
            .order_by_asc(entity::daily_player_count::Column::Date)
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(DailyPlayerCount::from_entity)
            .collect())
    }

    pub async fn create(&self, param: CreateDailyCountParam) -> Result<DailyPlayerCount, DbErr> {
        let count = entity::daily_player_count::ActiveModel {
            count: Set(param.count),
            percentage: Set(param.percentage),
            date: Set(param.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DailyPlayerCount::from_entity(count))
    }
}
