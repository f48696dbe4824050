use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        stats::{DailyPlayerCountDto, MonthlyStatsDto, ServerStatsDto},
    },
    server::{
        error::AppError,
        model::stats::{DailyPlayerCount, MonthlyStats},
        service::stats::StatsService,
        state::AppState,
    },
};

pub const STATS_TAG: &str = "stats";

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Latest server statistics snapshot", body = ServerStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db, state.prober.as_ref())
        .get_stats()
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/stats/activity",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Last week of daily player counts", body = Vec<DailyPlayerCountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_stats_activity(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let counts = StatsService::new(&state.db, state.prober.as_ref())
        .get_activity()
        .await?;

    let dtos: Vec<DailyPlayerCountDto> = counts
        .into_iter()
        .map(DailyPlayerCount::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/stats/monthly",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Player activity aggregated by month", body = Vec<MonthlyStatsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_stats_monthly(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let monthly = StatsService::new(&state.db, state.prober.as_ref())
        .get_monthly()
        .await?;

    let dtos: Vec<MonthlyStatsDto> = monthly.into_iter().map(MonthlyStats::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
