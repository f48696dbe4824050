use super::*;

/// Tests that screenshots come back newest first.
///
/// Expected: Ok with screenshots ordered by created_at descending
#[tokio::test]
async fn returns_screenshots_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Screenshot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = entity::screenshot::ActiveModel {
        id: ActiveValue::NotSet,
        title: ActiveValue::Set("Old base tour".to_string()),
        image_url: ActiveValue::Set("/uploads/old.png".to_string()),
        author: ActiveValue::Set("Alex".to_string()),
        created_at: ActiveValue::Set(Utc::now() - Duration::hours(2)),
    }
    .insert(db)
    .await?;
    let new = factory::screenshot::create_screenshot(db).await?;

    let screenshots = ScreenshotRepository::new(db).get_all().await?;

    assert_eq!(screenshots.len(), 2);
    assert_eq!(screenshots[0].id, new.id);
    assert_eq!(screenshots[1].id, old.id);

    Ok(())
}
