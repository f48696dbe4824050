use entity::prelude::ServerRule as ServerRuleEntity;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::content::{CreateServerRuleParam, ServerRule};

pub struct ServerRuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ServerRule>, DbErr> {
        let rules = ServerRuleEntity::find()
            .order_by_asc(entity::server_rule::Column::Position)
            .all(self.db)
            .await?;

        Ok(rules.into_iter().map(ServerRule::from_entity).collect())
    }

    pub async fn create(&self, param: CreateServerRuleParam) -> Result<ServerRule, DbErr> {
        let rule = entity::server_rule::ActiveModel {
            position: Set(param.position),
            title: Set(param.title),
            description: Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ServerRule::from_entity(rule))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        ServerRuleEntity::find().count(self.db).await
    }
}
