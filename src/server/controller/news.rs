use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, FieldErrorDto},
        news::{CreateNewsPostDto, NewsPostDto},
    },
    server::{
        error::AppError,
        model::news::NewsPost,
        service::news::NewsService,
        state::AppState,
    },
};

pub const NEWS_TAG: &str = "news";

#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "All news posts, newest first", body = Vec<NewsPostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = NewsService::new(&state.db).get_all().await?;

    let dtos: Vec<NewsPostDto> = posts.into_iter().map(NewsPost::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News post id")),
    responses(
        (status = 200, description = "The requested news post", body = NewsPostDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_news_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = NewsService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("News post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = CreateNewsPostDto,
    responses(
        (status = 201, description = "Created news post", body = NewsPostDto),
        (status = 400, description = "Invalid payload", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn create_news(
    State(state): State<AppState>,
    Json(payload): Json<CreateNewsPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let post = NewsService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News post id")),
    request_body = CreateNewsPostDto,
    responses(
        (status = 200, description = "Updated news post", body = NewsPostDto),
        (status = 400, description = "Invalid payload", body = FieldErrorDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateNewsPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let post = NewsService::new(&state.db)
        .update(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("News post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News post id")),
    responses(
        (status = 200, description = "News post deleted", body = DeleteResultDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = NewsService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("News post not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeleteResultDto { success: true })))
}
