use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::{
    feature::ServerFeatureRepository, gallery::GalleryImageRepository, rule::ServerRuleRepository,
};

mod feature;
mod gallery;
mod rule;
