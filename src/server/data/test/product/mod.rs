use crate::server::{
    data::product::ProductRepository,
    error::{query::QueryError, AppError},
    model::product::{CreateProductParam, UpdateProductParam},
    query::{executor::Listing, list_query::ListQuery},
};
use test_utils::{builder::TestBuilder, factory};

mod find;
mod list;
mod update;
