pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_station_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_product_table;
mod m20260105_000004_create_payment_method_table;
mod m20260105_000005_create_customer_purchase_table;
mod m20260105_000006_create_access_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_station_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_product_table::Migration),
            Box::new(m20260105_000004_create_payment_method_table::Migration),
            Box::new(m20260105_000005_create_customer_purchase_table::Migration),
            Box::new(m20260105_000006_create_access_token_table::Migration),
        ]
    }
}
