use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentMethod::Table)
                    .if_not_exists()
                    .col(string(PaymentMethod::Id).primary_key())
                    .col(string(PaymentMethod::Key))
                    .col(string(PaymentMethod::Name))
                    .col(string(PaymentMethod::Description))
                    .col(boolean(PaymentMethod::Status).default(true))
                    .col(timestamp_with_time_zone(PaymentMethod::CreatedAt))
                    .col(timestamp_with_time_zone(PaymentMethod::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentMethod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentMethod {
    #[sea_orm(iden = "payment_methods")]
    Table,
    Id,
    Key,
    Name,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}
