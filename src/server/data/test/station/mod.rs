use crate::server::{
    data::station::StationRepository,
    error::AppError,
    model::station::{CreateStationParam, UpdateStationParam},
    query::{executor::Listing, list_query::ListQuery},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod update;
