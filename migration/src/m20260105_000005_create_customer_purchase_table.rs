use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_station_table::Station;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerPurchase::Table)
                    .if_not_exists()
                    .col(string(CustomerPurchase::Id).primary_key())
                    .col(string(CustomerPurchase::Folio))
                    .col(double(CustomerPurchase::Iva))
                    .col(double(CustomerPurchase::Subtotal))
                    .col(double(CustomerPurchase::Total))
                    .col(string(CustomerPurchase::TotalLetters))
                    .col(string(CustomerPurchase::UserId))
                    .col(string_null(CustomerPurchase::StationId))
                    .col(json(CustomerPurchase::Products))
                    .col(json(CustomerPurchase::Payments))
                    .col(json_null(CustomerPurchase::Client))
                    .col(timestamp_with_time_zone(CustomerPurchase::CreatedAt))
                    .col(timestamp_with_time_zone(CustomerPurchase::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_purchases_station_id")
                            .from(CustomerPurchase::Table, CustomerPurchase::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_purchases_station_id")
                    .table(CustomerPurchase::Table)
                    .col(CustomerPurchase::StationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerPurchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomerPurchase {
    #[sea_orm(iden = "customer_purchases")]
    Table,
    Id,
    Folio,
    Iva,
    Subtotal,
    Total,
    TotalLetters,
    UserId,
    StationId,
    Products,
    Payments,
    Client,
    CreatedAt,
    UpdatedAt,
}
