use crate::model::content::{
    GalleryImageDto, ServerContentDto, ServerFeatureDto, ServerRuleDto,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ServerRule {
    pub id: i32,
    pub position: i32,
    pub title: String,
    pub description: String,
}

impl ServerRule {
    pub fn from_entity(entity: entity::server_rule::Model) -> Self {
        Self {
            id: entity.id,
            position: entity.position,
            title: entity.title,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> ServerRuleDto {
        ServerRuleDto {
            id: self.id,
            order: self.position,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerFeature {
    pub id: i32,
    pub position: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub icon_background: Option<String>,
}

impl ServerFeature {
    pub fn from_entity(entity: entity::server_feature::Model) -> Self {
        Self {
            id: entity.id,
            position: entity.position,
            title: entity.title,
            description: entity.description,
            icon: entity.icon,
            icon_background: entity.icon_background,
        }
    }

    pub fn into_dto(self) -> ServerFeatureDto {
        ServerFeatureDto {
            id: self.id,
            order: self.position,
            title: self.title,
            description: self.description,
            icon: self.icon,
            icon_background: self.icon_background,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: i32,
    pub position: i32,
    pub title: String,
    pub image_url: String,
}

impl GalleryImage {
    pub fn from_entity(entity: entity::gallery_image::Model) -> Self {
        Self {
            id: entity.id,
            position: entity.position,
            title: entity.title,
            image_url: entity.image_url,
        }
    }

    pub fn into_dto(self) -> GalleryImageDto {
        GalleryImageDto {
            id: self.id,
            order: self.position,
            title: self.title,
            image_url: self.image_url,
        }
    }
}

/// Everything the static pages need, fetched as one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerContent {
    pub server_rules: Vec<ServerRule>,
    pub server_features: Vec<ServerFeature>,
    pub gallery_images: Vec<GalleryImage>,
}

impl ServerContent {
    pub fn into_dto(self) -> ServerContentDto {
        ServerContentDto {
            server_rules: self.server_rules.into_iter().map(ServerRule::into_dto).collect(),
            server_features: self
                .server_features
                .into_iter()
                .map(ServerFeature::into_dto)
                .collect(),
            gallery_images: self
                .gallery_images
                .into_iter()
                .map(GalleryImage::into_dto)
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateServerRuleParam {
    pub position: i32,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateServerFeatureParam {
    pub position: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub icon_background: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateGalleryImageParam {
    pub position: i32,
    pub title: String,
    pub image_url: String,
}
