use super::*;

/// Tests that recording a peak stores the count and derives the record
/// date from the observation timestamp.
///
/// Expected: Ok with matching count and record_date
#[tokio::test]
async fn stores_count_with_derived_record_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PlayerPeak)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let peak = PlayerPeakRepository::new(db).record_peak(17, now).await?;

    assert_eq!(peak.count, 17);
    assert_eq!(peak.record_date, now.date_naive());
    assert_eq!(peak.timestamp, now);

    Ok(())
}

/// Tests that recording never overwrites earlier rows. Three records leave
/// three rows behind.
///
/// Expected: 3 rows in the table
#[tokio::test]
async fn appends_instead_of_updating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PlayerPeak)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerPeakRepository::new(db);

    repo.record_peak(5, Utc::now()).await?;
    repo.record_peak(12, Utc::now()).await?;
    repo.record_peak(20, Utc::now()).await?;

    let rows = entity::prelude::PlayerPeak::find().count(db).await?;

    assert_eq!(rows, 3);

    Ok(())
}
