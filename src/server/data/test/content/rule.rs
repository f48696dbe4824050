use super::*;

/// Tests that rules come back in display order, not insertion order.
///
/// Expected: Ok with rules ordered by position ascending
#[tokio::test]
async fn returns_rules_in_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerRule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server_rule::create_rule(db, 2).await?;
    factory::server_rule::create_rule(db, 3).await?;
    factory::server_rule::create_rule(db, 1).await?;

    let rules = ServerRuleRepository::new(db).get_all().await?;

    let positions: Vec<i32> = rules.iter().map(|rule| rule.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);

    Ok(())
}

/// Tests the emptiness check used by content seeding.
///
/// Expected: 0 before inserts, 2 after
#[tokio::test]
async fn counts_rules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerRule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRuleRepository::new(db);

    assert_eq!(repo.count().await?, 0);

    factory::server_rule::create_rule(db, 1).await?;
    factory::server_rule::create_rule(db, 2).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
