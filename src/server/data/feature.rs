use entity::prelude::ServerFeature as ServerFeatureEntity;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::content::{CreateServerFeatureParam, ServerFeature};

pub struct ServerFeatureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerFeatureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ServerFeature>, DbErr> {
        let features = ServerFeatureEntity::find()
            .order_by_asc(entity::server_feature::Column::Position)
            .all(self.db)
            .await?;

        Ok(features
            .into_iter()
            .map(ServerFeature::from_entity)
            .collect())
    }

    pub async fn create(&self, param: CreateServerFeatureParam) -> Result<ServerFeature, DbErr> {
        let feature = entity::server_feature::ActiveModel {
            position: Set(param.position),
            title: Set(param.title),
            description: Set(param.description),
            icon: Set(param.icon),
            icon_background: Set(param.icon_background),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ServerFeature::from_entity(feature))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        ServerFeatureEntity::find().count(self.db).await
    }
}
