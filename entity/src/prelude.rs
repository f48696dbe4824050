pub use super::daily_player_count::Entity as DailyPlayerCount;
pub use super::gallery_image::Entity as GalleryImage;
pub use super::news_post::Entity as NewsPost;
pub use super::player_peak::Entity as PlayerPeak;
pub use super::screenshot::Entity as Screenshot;
pub use super::server_feature::Entity as ServerFeature;
pub use super::server_rule::Entity as ServerRule;
pub use super::server_stats::Entity as ServerStats;
