use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::screenshot::ScreenshotRepository, model::screenshot::CreateScreenshotParam,
};

mod create;
mod delete;
mod get_all;
