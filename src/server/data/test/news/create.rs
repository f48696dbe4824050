use super::*;

/// Tests creating a post with an author.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_post_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = NewsRepository::new(db)
        .create(CreateNewsPostParam {
            title: "Summer event".to_string(),
            content: "The build contest starts on Saturday.".to_string(),
            author: Some("Steve".to_string()),
            is_anonymous: false,
        })
        .await?;

    assert_eq!(post.title, "Summer event");
    assert_eq!(post.author, Some("Steve".to_string()));
    assert!(!post.is_anonymous);

    let stored = NewsRepository::new(db).get_by_id(post.id).await?;
    assert_eq!(stored, Some(post));

    Ok(())
}

/// Tests creating an anonymous post without an author.
///
/// Expected: Ok with author None and is_anonymous true
#[tokio::test]
async fn creates_anonymous_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = NewsRepository::new(db)
        .create(CreateNewsPostParam {
            title: "Anonymous tip".to_string(),
            content: "There is a hidden chest under spawn.".to_string(),
            author: None,
            is_anonymous: true,
        })
        .await?;

    assert_eq!(post.author, None);
    assert!(post.is_anonymous);

    Ok(())
}
