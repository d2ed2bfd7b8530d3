use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_purchases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub folio: String,
    pub iva: f64,
    pub subtotal: f64,
    pub total: f64,
    pub total_letters: String,
    pub user_id: String,
    pub station_id: Option<String>,
    /// JSON array of sold products, each with its own taxes array.
    pub products: Json,
    /// JSON array of payments applied to the purchase.
    pub payments: Json,
    pub client: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
