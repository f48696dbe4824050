use sea_orm::entity::prelude::*;

/// Aggregate server statistics snapshot shown on the stats page.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "server_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub peak_players: i32,
    pub max_players: i32,
    pub uptime: f64,
    pub total_players: i32,
    pub world_size: String,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
