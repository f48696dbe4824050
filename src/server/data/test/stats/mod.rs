use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::stats::{DailyPlayerCountRepository, ServerStatsRepository},
    model::stats::{CreateDailyCountParam, CreateServerStatsParam},
};

mod daily_count;
mod server_stats;
