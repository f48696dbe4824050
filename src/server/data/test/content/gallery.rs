use super::*;

/// Tests that gallery images come back in display order.
///
/// Expected: Ok with images ordered by position ascending
#[tokio::test]
async fn returns_images_in_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GalleryImage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery_image::create_gallery_image(db, 3).await?;
    let first = factory::gallery_image::create_gallery_image(db, 1).await?;
    factory::gallery_image::create_gallery_image(db, 2).await?;

    let images = GalleryImageRepository::new(db).get_all().await?;

    assert_eq!(images.len(), 3);
    assert_eq!(images[0].id, first.id);
    assert_eq!(images[0].image_url, first.image_url);

    Ok(())
}
