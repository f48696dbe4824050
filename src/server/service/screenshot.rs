use std::{
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::screenshot::ScreenshotRepository,
    error::AppError,
    model::screenshot::{CreateScreenshotParam, Screenshot, UploadScreenshotParam},
};

const DEFAULT_TITLE: &str = "Community Screenshot";
const DEFAULT_AUTHOR: &str = "Anonymous";

static UPLOAD_SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub struct ScreenshotService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
    app_url: &'a str,
}

impl<'a> ScreenshotService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path, app_url: &'a str) -> Self {
        Self {
            db,
            upload_dir,
            app_url,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Screenshot>, AppError> {
        let screenshots = ScreenshotRepository::new(self.db).get_all().await?;

        Ok(screenshots)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Screenshot>, AppError> {
        let screenshot = ScreenshotRepository::new(self.db).get_by_id(id).await?;

        Ok(screenshot)
    }

    /// Writes the image to the upload directory under a unique name and
    /// records it with an absolute URL pointing back at this service.
    pub async fn upload(&self, param: UploadScreenshotParam) -> Result<Screenshot, AppError> {
        let stored_name = unique_file_name(&param.file_name);

        tokio::fs::write(self.upload_dir.join(&stored_name), &param.data).await?;

        let image_url = format!(
            "{}/uploads/{}",
            self.app_url.trim_end_matches('/'),
            stored_name
        );

        let screenshot = ScreenshotRepository::new(self.db)
            .create(CreateScreenshotParam {
                title: param
                    .title
                    .filter(|title| !title.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                image_url,
                author: param
                    .author
                    .filter(|author| !author.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            })
            .await?;

        Ok(screenshot)
    }

    /// Deletes the database row and best-effort removes the stored file.
    /// Returns false when the id does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(screenshot) = ScreenshotRepository::new(self.db).delete(id).await? else {
            return Ok(false);
        };

        if let Some(file_name) = screenshot.image_url.rsplit('/').next() {
            if let Err(err) = tokio::fs::remove_file(self.upload_dir.join(file_name)).await {
                tracing::warn!(
                    "Failed to remove screenshot file {}: {}",
                    file_name,
                    err
                );
            }
        }

        Ok(true)
    }
}

/// Builds a collision-free stored file name, keeping the original extension.
fn unique_file_name(original: &str) -> String {
    let extension = Path::new(original)
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or("png");

    let sequence = UPLOAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);

    format!(
        "screenshot-{}-{}.{}",
        Utc::now().timestamp_millis(),
        sequence,
        extension
    )
}
