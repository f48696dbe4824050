//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `create_*`
//! convenience function; entities with more fields also expose a `Factory` struct for
//! customization through a builder pattern.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let post = factory::news_post::create_news_post(&db).await?;
//!     let peak = factory::player_peak::create_peak(&db, 12).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use chrono::{Duration, Utc};
//! use test_utils::factory::player_peak::PlayerPeakFactory;
//!
//! // A peak recorded yesterday
//! let peak = PlayerPeakFactory::new(&db)
//!     .count(30)
//!     .timestamp(Utc::now() - Duration::days(1))
//!     .build()
//!     .await?;
//! ```

pub mod daily_player_count;
pub mod gallery_image;
pub mod helpers;
pub mod news_post;
pub mod player_peak;
pub mod screenshot;
pub mod server_feature;
pub mod server_rule;
pub mod server_stats;

// Re-export commonly used factory functions for concise usage
pub use daily_player_count::create_daily_count;
pub use gallery_image::create_gallery_image;
pub use news_post::create_news_post;
pub use player_peak::create_peak;
pub use screenshot::create_screenshot;
pub use server_feature::create_feature;
pub use server_rule::create_rule;
pub use server_stats::create_server_stats;
