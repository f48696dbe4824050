use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::news::NewsRepository,
    model::news::{CreateNewsPostParam, UpdateNewsPostParam},
};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
