use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto},
        screenshot::ScreenshotDto,
    },
    server::{
        error::AppError,
        model::screenshot::{Screenshot, UploadScreenshotParam},
        service::screenshot::ScreenshotService,
        state::AppState,
    },
};

pub const SCREENSHOT_TAG: &str = "screenshots";

#[utoipa::path(
    get,
    path = "/api/screenshots",
    tag = SCREENSHOT_TAG,
    responses(
        (status = 200, description = "All screenshots, newest first", body = Vec<ScreenshotDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_screenshots(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let screenshots = ScreenshotService::new(&state.db, &state.upload_dir, &state.app_url)
        .get_all()
        .await?;

    let dtos: Vec<ScreenshotDto> = screenshots
        .into_iter()
        .map(Screenshot::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/screenshots/{id}",
    tag = SCREENSHOT_TAG,
    params(("id" = i32, Path, description = "Screenshot id")),
    responses(
        (status = 200, description = "The requested screenshot", body = ScreenshotDto),
        (status = 404, description = "Screenshot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_screenshot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let screenshot = ScreenshotService::new(&state.db, &state.upload_dir, &state.app_url)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Screenshot not found".to_string()))?;

    Ok((StatusCode::OK, Json(screenshot.into_dto())))
}

/// Multipart upload: a `screenshot` image file plus optional `title` and
/// `author` text fields.
#[utoipa::path(
    post,
    path = "/api/screenshots",
    tag = SCREENSHOT_TAG,
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Uploaded screenshot", body = ScreenshotDto),
        (status = 400, description = "Missing or non-image file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn upload_screenshot(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut title = None;
    let mut author = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("screenshot") => {
                let is_image = field
                    .content_type()
                    .is_some_and(|content_type| content_type.starts_with("image/"));

                if !is_image {
                    return Err(AppError::BadRequest(
                        "Only image files are allowed".to_string(),
                    ));
                }

                let file_name = field
                    .file_name()
                    .unwrap_or("screenshot.png")
                    .to_string();

                file = Some((file_name, field.bytes().await?.to_vec()));
            }
            Some("title") => title = Some(field.text().await?),
            Some("author") => author = Some(field.text().await?),
            _ => {}
        }
    }

    let Some((file_name, data)) = file else {
        return Err(AppError::BadRequest(
            "No screenshot file provided".to_string(),
        ));
    };

    let screenshot = ScreenshotService::new(&state.db, &state.upload_dir, &state.app_url)
        .upload(UploadScreenshotParam {
            file_name,
            data,
            title,
            author,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(screenshot.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/screenshots/{id}",
    tag = SCREENSHOT_TAG,
    params(("id" = i32, Path, description = "Screenshot id")),
    responses(
        (status = 200, description = "Screenshot deleted", body = DeleteResultDto),
        (status = 404, description = "Screenshot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn delete_screenshot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = ScreenshotService::new(&state.db, &state.upload_dir, &state.app_url)
        .delete(id)
        .await?;

    if !deleted {
        return Err(AppError::NotFound("Screenshot not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeleteResultDto { success: true })))
}
