use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam},
        query::{executor::Listing, list_query::ListQuery, predicate::{compile, Predicate}},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials;
mod list;
