use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::peak::PlayerPeakRepository;

mod get_today_peak;
mod record_peak;
