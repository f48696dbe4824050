use super::*;

/// Tests recording uploaded screenshot metadata.
///
/// Expected: Ok with fields persisted and a fresh created_at
#[tokio::test]
async fn creates_screenshot_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Screenshot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let screenshot = ScreenshotRepository::new(db)
        .create(CreateScreenshotParam {
            title: "Castle at dawn".to_string(),
            image_url: "/uploads/screenshot-1.png".to_string(),
            author: "Alex".to_string(),
        })
        .await?;

    assert_eq!(screenshot.title, "Castle at dawn");
    assert_eq!(screenshot.author, "Alex");

    let stored = ScreenshotRepository::new(db).get_by_id(screenshot.id).await?;
    assert_eq!(stored, Some(screenshot));

    Ok(())
}
