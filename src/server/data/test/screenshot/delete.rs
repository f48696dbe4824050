use super::*;

/// Tests that deleting returns the removed screenshot so the caller can
/// clean up the stored file.
///
/// Expected: Ok(Some(screenshot)) and the row is gone
#[tokio::test]
async fn returns_deleted_screenshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Screenshot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::screenshot::create_screenshot(db).await?;

    let repo = ScreenshotRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted.is_some());
    assert_eq!(deleted.unwrap().image_url, created.image_url);
    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_screenshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Screenshot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ScreenshotRepository::new(db).delete(9999).await?;

    assert!(deleted.is_none());

    Ok(())
}
