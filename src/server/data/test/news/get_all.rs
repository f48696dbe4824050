use super::*;

/// Tests that posts come back newest first regardless of insertion order.
///
/// Expected: Ok with posts ordered by created_at descending
#[tokio::test]
async fn returns_posts_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::news_post::NewsPostFactory::new(db)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newest = factory::news_post::NewsPostFactory::new(db)
        .created_at(Utc::now())
        .build()
        .await?;
    let middle = factory::news_post::NewsPostFactory::new(db)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let posts = NewsRepository::new(db).get_all().await?;

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].id, newest.id);
    assert_eq!(posts[1].id, middle.id);
    assert_eq!(posts[2].id, old.id);

    Ok(())
}

/// Tests that an empty table yields an empty list rather than an error.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_list_without_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let posts = NewsRepository::new(db).get_all().await?;

    assert!(posts.is_empty());

    Ok(())
}
