use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum::Json;

use crate::{
    model::{api::ErrorDto, content::ServerContentDto},
    server::{error::AppError, service::content::ContentService, state::AppState},
};

pub const CONTENT_TAG: &str = "content";

/// Static site content: rules, features and gallery images in one payload.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All static server content", body = ServerContentDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_content(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let content = ContentService::new(&state.db).get_content().await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}
