use super::*;

/// Tests fetching an existing post by id.
///
/// Expected: Ok(Some(post))
#[tokio::test]
async fn returns_existing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::news_post::create_news_post(db).await?;

    let post = NewsRepository::new(db).get_by_id(created.id).await?;

    assert!(post.is_some());
    let post = post.unwrap();
    assert_eq!(post.id, created.id);
    assert_eq!(post.title, created.title);

    Ok(())
}

/// Tests fetching a missing id.
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

    let post = NewsRepository::new(db).get_by_id(9999).await?;

    assert!(post.is_none());

    Ok(())
}
