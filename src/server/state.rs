use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::service::probe::StatusProber;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub prober: Arc<dyn StatusProber>,
    pub upload_dir: PathBuf,
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        prober: Arc<dyn StatusProber>,
        upload_dir: PathBuf,
        app_url: String,
    ) -> Self {
        Self {
            db,
            prober,
            upload_dir,
            app_url,
        }
    }
}
