use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        feature::ServerFeatureRepository, gallery::GalleryImageRepository,
        rule::ServerRuleRepository,
    },
    error::AppError,
    model::content::ServerContent,
};

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rules, features and gallery images in display order.
    pub async fn get_content(&self) -> Result<ServerContent, AppError> {
        let server_rules = ServerRuleRepository::new(self.db).get_all().await?;
        let server_features = ServerFeatureRepository::new(self.db).get_all().await?;
        let gallery_images = GalleryImageRepository::new(self.db).get_all().await?;

        Ok(ServerContent {
            server_rules,
            server_features,
            gallery_images,
        })
    }
}
