//! Gallery image factory for creating test gallery entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a gallery image at the given position with a generated URL.
///
/// # Arguments
/// - `db` - Database connection
/// - `position` - Display order of the image
///
/// # Returns
/// - `Ok(entity::gallery_image::Model)` - Created gallery image entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_gallery_image(
    db: &DatabaseConnection,
    position: i32,
) -> Result<entity::gallery_image::Model, DbErr> {
    let id = next_id();
    entity::gallery_image::ActiveModel {
        id: ActiveValue::NotSet,
        position: ActiveValue::Set(position),
        title: ActiveValue::Set(format!("Gallery Image {}", id)),
        image_url: ActiveValue::Set(format!("https://example.com/gallery/{}.jpg", id)),
    }
    .insert(db)
    .await
}
