use super::*;

/// Tests deleting an existing post.
///
/// Expected: Ok(true) and the post is gone
#[tokio::test]
async fn deletes_existing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::news_post::create_news_post(db).await?;

    let repo = NewsRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = NewsRepository::new(db).delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
