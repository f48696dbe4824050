mod config;

pub use config::ConfigError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldErrorDto};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigErr(#[from] ConfigError),
    #[error("Database error: {0}")]
    DbErr(#[from] sea_orm::DbErr),
    #[error("Request error: {0}")]
    ReqwestErr(#[from] reqwest::Error),
    #[error("Scheduler error: {0}")]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
    #[error("IO error: {0}")]
    IoErr(#[from] std::io::Error),
    #[error("Multipart error: {0}")]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: message })).into_response()
            }
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                Json(FieldErrorDto {
                    error: message,
                    field: field.to_string(),
                }),
            )
                .into_response(),
            AppError::MultipartErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
