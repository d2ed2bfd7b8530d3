use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessToken::Table)
                    .if_not_exists()
                    .col(string(AccessToken::Id).primary_key())
                    .col(string_uniq(AccessToken::Token))
                    .col(string(AccessToken::UserId))
                    .col(string(AccessToken::Email))
                    .col(string(AccessToken::Role))
                    .col(timestamp_with_time_zone(AccessToken::CreatedAt))
                    .col(timestamp_with_time_zone(AccessToken::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Token pruning filters on creation time.
        manager
            .create_index(
                Index::create()
                    .name("idx_access_tokens_created_at")
                    .table(AccessToken::Table)
                    .col(AccessToken::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccessToken {
    #[sea_orm(iden = "access_tokens")]
    Table,
    Id,
    Token,
    UserId,
    Email,
    Role,
    CreatedAt,
    UpdatedAt,
}
