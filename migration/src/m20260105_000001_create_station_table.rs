use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Station::Table)
                    .if_not_exists()
                    .col(string(Station::Id).primary_key())
                    .col(string(Station::Name))
                    .col(string(Station::Email))
                    .col(string_uniq(Station::StationKey))
                    .col(boolean(Station::Active).default(true))
                    .col(string_null(Station::Street))
                    .col(string_null(Station::Outside))
                    .col(string_null(Station::ZipCode))
                    .col(string(Station::State))
                    .col(string(Station::Municipality))
                    .col(timestamp_with_time_zone(Station::CreatedAt))
                    .col(timestamp_with_time_zone(Station::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Station::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Station {
    #[sea_orm(iden = "stations")]
    Table,
    Id,
    Name,
    Email,
    StationKey,
    Active,
    Street,
    Outside,
    ZipCode,
    State,
    Municipality,
    CreatedAt,
    UpdatedAt,
}
