use sea_orm::entity::prelude::*;

/// A once-daily sample of the online player count, used for activity charts.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_player_count")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub count: i32,
    pub percentage: i32,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
