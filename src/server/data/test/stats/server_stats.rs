use super::*;

/// Tests that an empty table yields no snapshot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_snapshots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = ServerStatsRepository::new(db).get_latest().await?;

    assert!(stats.is_none());

    Ok(())
}

/// Tests that the most recent snapshot by date wins, not the highest id.
///
/// Expected: Ok(Some(newest snapshot))
#[tokio::test]
async fn returns_most_recent_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let newest = factory::server_stats::create_server_stats(db, 32).await?;
    entity::server_stats::ActiveModel {
        id: ActiveValue::NotSet,
        peak_players: ActiveValue::Set(18),
        max_players: ActiveValue::Set(100),
        uptime: ActiveValue::Set(99.2),
        total_players: ActiveValue::Set(900),
        world_size: ActiveValue::Set("3.9 GB".to_string()),
        date: ActiveValue::Set(Utc::now() - Duration::days(1)),
    }
    .insert(db)
    .await?;

    let stats = ServerStatsRepository::new(db).get_latest().await?;

    assert!(stats.is_some());
    let stats = stats.unwrap();
    assert_eq!(stats.id, newest.id);
    assert_eq!(stats.peak_players, 32);

    Ok(())
}

/// Tests creating the baseline snapshot written during seeding.
///
/// Expected: Ok with all fields persisted and get_latest serving the row
#[tokio::test]
async fn create_stores_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerStatsRepository::new(db);

    let created = repo
        .create(CreateServerStatsParam {
            peak_players: 0,
            max_players: 100,
            uptime: 99.8,
            total_players: 1247,
            world_size: "4.2 GB".to_string(),
            date: Utc::now(),
        })
        .await?;

    assert_eq!(created.peak_players, 0);
    assert_eq!(created.world_size, "4.2 GB");

    let latest = repo.get_latest().await?;
    assert_eq!(latest, Some(created));

    Ok(())
}

/// Tests raising the stored peak when a higher count is observed.
///
/// Expected: Ok(Some) with the new peak persisted on the same row
#[tokio::test]
async fn raise_peak_updates_latest_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::server_stats::create_server_stats(db, 20).await?;

    let repo = ServerStatsRepository::new(db);
    let raised = repo.raise_peak(30).await?;

    assert!(raised.is_some());
    let raised = raised.unwrap();
    assert_eq!(raised.id, created.id);
    assert_eq!(raised.peak_players, 30);

    let latest = repo.get_latest().await?;
    assert_eq!(latest.unwrap().peak_players, 30);

    Ok(())
}

/// Tests that a lower or equal observation leaves the snapshot alone.
///
/// Expected: Ok(None) and the stored peak unchanged
#[tokio::test]
async fn raise_peak_ignores_lower_observation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server_stats::create_server_stats(db, 40).await?;

    let repo = ServerStatsRepository::new(db);

    assert!(repo.raise_peak(30).await?.is_none());
    assert!(repo.raise_peak(40).await?.is_none());
    assert_eq!(repo.get_latest().await?.unwrap().peak_players, 40);

    Ok(())
}

/// Tests raising against an empty table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn raise_peak_without_snapshot_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let raised = ServerStatsRepository::new(db).raise_peak(30).await?;

    assert!(raised.is_none());

    Ok(())
}
