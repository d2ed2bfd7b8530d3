use crate::server::{
    data::payment_method::PaymentMethodRepository,
    error::AppError,
    model::payment_method::{CreatePaymentMethodParam, UpdatePaymentMethodParam},
    query::{executor::Listing, list_query::ListQuery},
};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod update;
