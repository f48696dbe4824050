pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_news_post_table;
mod m20260712_000002_create_server_rule_table;
mod m20260712_000003_create_server_feature_table;
mod m20260712_000004_create_gallery_image_table;
mod m20260712_000005_create_screenshot_table;
mod m20260712_000006_create_player_peak_table;
mod m20260712_000007_create_server_stats_table;
mod m20260712_000008_create_daily_player_count_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_news_post_table::Migration),
            Box::new(m20260712_000002_create_server_rule_table::Migration),
            Box::new(m20260712_000003_create_server_feature_table::Migration),
            Box::new(m20260712_000004_create_gallery_image_table::Migration),
            Box::new(m20260712_000005_create_screenshot_table::Migration),
            Box::new(m20260712_000006_create_player_peak_table::Migration),
            Box::new(m20260712_000007_create_server_stats_table::Migration),
            Box::new(m20260712_000008_create_daily_player_count_table::Migration),
        ]
    }
}
