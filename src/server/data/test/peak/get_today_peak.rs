use super::*;

/// Tests reading the peak when no rows exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PlayerPeak)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let peak = PlayerPeakRepository::new(db).get_today_peak(Utc::now()).await?;

    assert_eq!(peak, 0);

    Ok(())
}

/// Tests that the peak is the maximum count among today's rows, not the
/// most recently inserted one.
///
/// Expected: Ok(20)
#[tokio::test]
async fn returns_highest_count_of_the_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PlayerPeak)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player_peak::create_peak(db, 5).await?;
    factory::player_peak::create_peak(db, 20).await?;
    factory::player_peak::create_peak(db, 12).await?;

    let peak = PlayerPeakRepository::new(db).get_today_peak(Utc::now()).await?;

    assert_eq!(peak, 20);

    Ok(())
}

/// Tests that yesterday's rows do not leak into today's peak, so the value
/// resets to the current day's observations after a day rollover.
///
/// Expected: Ok(10)
#[tokio::test]
async fn ignores_rows_from_previous_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PlayerPeak)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player_peak::PlayerPeakFactory::new(db)
        .count(50)
        .timestamp(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::player_peak::create_peak(db, 10).await?;

    let peak = PlayerPeakRepository::new(db).get_today_peak(Utc::now()).await?;

    assert_eq!(peak, 10);

    Ok(())
}

/// Tests that a fresh day with no observations reports zero even when
/// history exists for earlier days.
///
/// Expected: Ok(0)
#[tokio::test]
async fn resets_to_zero_on_day_rollover() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PlayerPeak)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player_peak::PlayerPeakFactory::new(db)
        .count(42)
        .timestamp(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let peak = PlayerPeakRepository::new(db).get_today_peak(Utc::now()).await?;

    assert_eq!(peak, 0);

    Ok(())
}
