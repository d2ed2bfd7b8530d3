use crate::server::{
    data::access_token::{AccessTokenRepository, CreateAccessTokenParam},
    error::AppError,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod find_by_token;
mod prune_older_than;
