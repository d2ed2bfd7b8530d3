use crate::server::{
    error::query::QueryError,
    query::{
        operator::{classify, Operator},
        predicate::{compile, Predicate},
    },
};
use chrono::{TimeZone, Utc};
use entity::product::{Entity as Product, Model as ProductModel};


fn product(name: &str, price: f64) -> ProductModel {
    let at = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
    ProductModel {
        id: "4f1c7a2e-5b0d-4c8e-9a3f-2d6b8e1f0a7c".to_string(),
        name: name.to_string(),
        description: "Fuel".to_string(),
        price,
        price_public: price * 1.16,
        created_at: at,
        updated_at: at,
    }
}
