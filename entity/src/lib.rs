//! SeaORM entity models for the Blockhaven database schema.

pub mod prelude;

pub mod daily_player_count;
pub mod gallery_image;
pub mod news_post;
pub mod player_peak;
pub mod screenshot;
pub mod server_feature;
pub mod server_rule;
pub mod server_stats;
