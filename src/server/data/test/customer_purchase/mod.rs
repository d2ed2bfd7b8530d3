use crate::{
    model::customer_purchase::{ClientDto, PaymentDto, ProductSoldDto, TaxDto},
    server::{
        data::customer_purchase::CustomerPurchaseRepository,
        error::AppError,
        model::customer_purchase::CreateCustomerPurchaseParam,
        query::{
            executor::{Listing, QueryExecutor},
            list_query::ListQuery,
            predicate::{compile, Predicate},
        },
    },
};
use chrono::{Duration, Utc};
use entity::customer_purchase::Entity as CustomerPurchase;
use sea_orm::EntityTrait;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod populate;
