use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::status::ServerStatusDto,
    server::{service::status::StatusService, state::AppState},
};

pub const STATUS_TAG: &str = "status";

/// Live server status plus today's player peak. Always returns 200; an
/// unreachable server is reported as offline.
#[utoipa::path(
    get,
    path = "/api/server-status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Current server status", body = ServerStatusDto),
    )
)]
pub async fn get_server_status(State(state): State<AppState>) -> impl IntoResponse {
    let summary = StatusService::new(&state.db, state.prober.as_ref())
        .get_status()
        .await;

    (StatusCode::OK, Json(summary.into_dto()))
}
