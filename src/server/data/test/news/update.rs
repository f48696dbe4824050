use super::*;

/// Tests updating an existing post's fields.
///
/// Expected: Ok(Some(post)) with new values persisted
#[tokio::test]
async fn updates_existing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::news_post::create_news_post(db).await?;

    let updated = NewsRepository::new(db)
        .update(UpdateNewsPostParam {
            id: created.id,
            title: "Corrected title".to_string(),
            content: "Corrected body".to_string(),
            author: None,
            is_anonymous: true,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Corrected title");
    assert_eq!(updated.author, None);
    assert!(updated.is_anonymous);
    // Creation time is preserved across edits
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests updating a missing id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = NewsRepository::new(db)
        .update(UpdateNewsPostParam {
            id: 9999,
            title: "Ghost".to_string(),
            content: "Ghost".to_string(),
            author: None,
            is_anonymous: false,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
