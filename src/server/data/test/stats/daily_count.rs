use super::*;

/// Tests that the activity window keeps only the most recent samples and
/// presents them oldest first for charting.
///
/// Expected: Ok with the 7 newest of 10 samples, ascending by date
#[tokio::test]
async fn get_recent_limits_and_orders_samples() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DailyPlayerCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for days_ago in 0..10 {
        factory::daily_player_count::create_daily_count(
            db,
            days_ago,
            Utc::now() - Duration::days(days_ago as i64),
        )
        .await?;
    }

    let counts = DailyPlayerCountRepository::new(db).get_recent(7).await?;

    assert_eq!(counts.len(), 7);
    // Oldest retained sample is from 6 days ago, newest from today
    assert_eq!(counts[0].count, 6);
    assert_eq!(counts[6].count, 0);
    assert!(counts.windows(2).all(|pair| pair[0].date <= pair[1].date));

    Ok(())
}

/// Tests that fewer samples than the window just returns them all.
///
/// Expected: Ok with 2 samples
#[tokio::test]
async fn get_recent_handles_short_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DailyPlayerCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::daily_player_count::create_daily_count(db, 5, Utc::now() - Duration::days(1)).await?;
    factory::daily_player_count::create_daily_count(db, 9, Utc::now()).await?;

    let counts = DailyPlayerCountRepository::new(db).get_recent(7).await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].count, 5);
    assert_eq!(counts[1].count, 9);

    Ok(())
}

/// Tests storing a snapshot row.
///
/// Expected: Ok with count and percentage persisted
#[tokio::test]
async fn create_stores_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DailyPlayerCount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let created = DailyPlayerCountRepository::new(db)
        .create(CreateDailyCountParam {
            count: 16,
            percentage: 80,
            date: now,
        })
        .await?;

    assert_eq!(created.count, 16);
    assert_eq!(created.percentage, 80);
    assert_eq!(created.date, now);

    let all = DailyPlayerCountRepository::new(db).get_all().await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
