use super::*;

/// Tests that features come back in display order with icon data intact.
///
/// Expected: Ok with features ordered by position ascending
#[tokio::test]
async fn returns_features_in_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerFeature)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server_feature::create_feature(db, 2).await?;
    let first = factory::server_feature::create_feature(db, 1).await?;

    let features = ServerFeatureRepository::new(db).get_all().await?;

    assert_eq!(features.len(), 2);
    assert_eq!(features[0].id, first.id);
    assert_eq!(features[0].icon, first.icon);
    assert!(features[0].icon_background.is_some());

    Ok(())
}
