use std::path::Path;

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::{
        feature::ServerFeatureRepository, gallery::GalleryImageRepository, news::NewsRepository,
        rule::ServerRuleRepository, stats::ServerStatsRepository,
    },
    error::AppError,
    model::{
        content::{CreateGalleryImageParam, CreateServerFeatureParam, CreateServerRuleParam},
        news::CreateNewsPostParam,
        stats::CreateServerStatsParam,
    },
};

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = Database::connect(&config.database_url).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database");

    Ok(db)
}

pub async fn ensure_upload_dir(upload_dir: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(upload_dir).await?;

    Ok(())
}

/// Seeds starter content so a fresh deployment has something to show.
/// Each table is only touched when it is empty, so edits survive restarts.
pub async fn seed_default_content(db: &DatabaseConnection) -> Result<(), AppError> {
    seed_rules(db).await?;
    seed_features(db).await?;
    seed_gallery(db).await?;
    seed_news(db).await?;
    seed_stats(db).await?;

    Ok(())
}

async fn seed_rules(db: &DatabaseConnection) -> Result<(), AppError> {
    let repository = ServerRuleRepository::new(db);

    if repository.count().await? > 0 {
        return Ok(());
    }

    let rules = [
        (
            "Be Respectful",
            "Treat every player with respect. Harassment, hate speech and personal attacks are not tolerated.",
        ),
        (
            "No Griefing",
            "Do not destroy or alter builds that are not yours. Leave the world better than you found it.",
        ),
        (
            "No Stealing",
            "Items in chests, farms and bases belong to their owners. Ask before you take.",
        ),
        (
            "Keep Chat Friendly",
            "The server is family friendly. Keep language and topics appropriate for all ages.",
        ),
        (
            "No Cheating",
            "Hacked clients, exploits and duplication glitches are banned. Play fair.",
        ),
    ];

    for (position, (title, description)) in rules.into_iter().enumerate() {
        repository
            .create(CreateServerRuleParam {
                position: position as i32 + 1,
                title: title.to_string(),
                description: description.to_string(),
            })
            .await?;
    }

    tracing::info!("Seeded default server rules");

    Ok(())
}

async fn seed_features(db: &DatabaseConnection) -> Result<(), AppError> {
    let repository = ServerFeatureRepository::new(db);

    if repository.count().await? > 0 {
        return Ok(());
    }

    let features = [
        (
            "Survival World",
            "A fresh survival world with land claiming so your builds stay safe.",
            "pickaxe",
            Some("green"),
        ),
        (
            "Community Builds",
            "Shared projects like the spawn town, shopping district and public farms.",
            "castle",
            Some("blue"),
        ),
        (
            "Regular Events",
            "Build contests, treasure hunts and seasonal celebrations throughout the year.",
            "trophy",
            Some("amber"),
        ),
        (
            "Friendly Community",
            "A small, welcoming group of players of all ages and skill levels.",
            "users",
            Some("purple"),
        ),
    ];

    for (position, (title, description, icon, icon_background)) in
        features.into_iter().enumerate()
    {
        repository
            .create(CreateServerFeatureParam {
                position: position as i32 + 1,
                title: title.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
                icon_background: icon_background.map(str::to_string),
            })
            .await?;
    }

    tracing::info!("Seeded default server features");

    Ok(())
}

async fn seed_gallery(db: &DatabaseConnection) -> Result<(), AppError> {
    let repository = GalleryImageRepository::new(db);

    if repository.count().await? > 0 {
        return Ok(());
    }

    let images = [
        ("Spawn Town", "/images/gallery/spawn-town.jpg"),
        ("The Castle Project", "/images/gallery/castle.jpg"),
        ("Night at the Harbor", "/images/gallery/harbor.jpg"),
        ("Community Farm", "/images/gallery/farm.jpg"),
    ];

    for (position, (title, image_url)) in images.into_iter().enumerate() {
        repository
            .create(CreateGalleryImageParam {
                position: position as i32 + 1,
                title: title.to_string(),
                image_url: image_url.to_string(),
            })
            .await?;
    }

    tracing::info!("Seeded default gallery images");

    Ok(())
}

async fn seed_news(db: &DatabaseConnection) -> Result<(), AppError> {
    let repository = NewsRepository::new(db);

    if repository.count().await? > 0 {
        return Ok(());
    }

    repository
        .create(CreateNewsPostParam {
            title: "Welcome to the server!".to_string(),
            content: "The community website is live. Check back here for server news, \
                      events and updates."
                .to_string(),
            author: Some("Server Team".to_string()),
            is_anonymous: false,
        })
        .await?;

    tracing::info!("Seeded welcome news post");

    Ok(())
}

/// Creates the baseline stats snapshot the peak tick raises over time, so
/// `GET /api/stats` always has a stored row to serve.
async fn seed_stats(db: &DatabaseConnection) -> Result<(), AppError> {
    let repository = ServerStatsRepository::new(db);

    if repository.get_latest().await?.is_some() {
        return Ok(());
    }

    repository
        .create(CreateServerStatsParam {
            peak_players: 0,
            max_players: 100,
            uptime: 99.8,
            total_players: 1247,
            world_size: "4.2 GB".to_string(),
            date: Utc::now(),
        })
        .await?;

    tracing::info!("Seeded baseline server stats snapshot");

    Ok(())
}
