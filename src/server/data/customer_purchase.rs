use chrono::Utc;
use entity::customer_purchase::{Column, Entity, Model};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::server::{
    error::{internal::InternalError, query::QueryError, AppError},
    model::customer_purchase::{CreateCustomerPurchaseParam, CustomerPurchase},
    query::{
        collection::Collection,
        document::{to_document, Document},
        executor::{Listing, QueryExecutor},
        field::{Field, FieldKind, FieldValue},
        list_query::ListQuery,
        predicate::Predicate,
        relation::{CollectionLookup, Relation},
    },
};

static FIELDS: &[Field<Entity>] = &[
    Field {
        name: "Id",
        key: "id",
        column: Column::Id,
        kind: FieldKind::Id,
        read: |m| FieldValue::Id(m.id.clone()),
    },
    Field {
        name: "Folio",
        key: "folio",
        column: Column::Folio,
        kind: FieldKind::Text,
        read: |m| m.folio.clone().into(),
    },
    Field {
        name: "Iva",
        key: "iva",
        column: Column::Iva,
        kind: FieldKind::Number,
        read: |m| m.iva.into(),
    },
    Field {
        name: "Subtotal",
        key: "subtotal",
        column: Column::Subtotal,
        kind: FieldKind::Number,
        read: |m| m.subtotal.into(),
    },
    Field {
        name: "Total",
        key: "total",
        column: Column::Total,
        kind: FieldKind::Number,
        read: |m| m.total.into(),
    },
    Field {
        name: "TotalLetters",
        key: "totalLetters",
        column: Column::TotalLetters,
        kind: FieldKind::Text,
        read: |m| m.total_letters.clone().into(),
    },
    Field {
        name: "UserId",
        key: "userId",
        column: Column::UserId,
        kind: FieldKind::Id,
        read: |m| FieldValue::Id(m.user_id.clone()),
    },
    Field {
        name: "StationId",
        key: "stationId",
        column: Column::StationId,
        kind: FieldKind::Id,
        read: |m| m.station_id.clone().map_or(FieldValue::Null, FieldValue::Id),
    },
    Field {
        name: "CreatedAt",
        key: "createdAt",
        column: Column::CreatedAt,
        kind: FieldKind::DateTime,
        read: |m| m.created_at.into(),
    },
    Field {
        name: "UpdatedAt",
        key: "updatedAt",
        column: Column::UpdatedAt,
        kind: FieldKind::DateTime,
        read: |m| m.updated_at.into(),
    },
];

static RELATIONS: &[Relation] = &[
    Relation {
        entity: "Stations",
        local_key: "stationId",
        foreign_key: "id",
        just_one: true,
        target: &CollectionLookup::<entity::station::Entity>::new(),
    },
    Relation {
        entity: "Users",
        local_key: "userId",
        foreign_key: "id",
        just_one: true,
        target: &CollectionLookup::<entity::user::Entity>::new(),
    },
];

impl Collection for Entity {
    const NAME: &'static str = "customer_purchases";

    fn fields() -> &'static [Field<Self>] {
        FIELDS
    }

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn to_document(model: &Model) -> Result<Document, QueryError> {
        let purchase =
            CustomerPurchase::from_entity(model.clone()).map_err(|e| QueryError::Document {
                collection: Self::NAME,
                reason: e.to_string(),
            })?;

        to_document(Self::NAME, &purchase.into_dto())
    }
}

pub struct CustomerPurchaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerPurchaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a purchase, encoding its nested values as JSON columns.
    pub async fn create(
        &self,
        param: CreateCustomerPurchaseParam,
    ) -> Result<CustomerPurchase, AppError> {
        let id = Uuid::new_v4().to_string();
        let encode = |column: &'static str, result: Result<serde_json::Value, serde_json::Error>| {
            result.map_err(|source| InternalError::CorruptColumn {
                collection: Entity::NAME,
                column,
                id: id.clone(),
                source,
            })
        };

        let products = encode("products", serde_json::to_value(&param.products))?;
        let payments = encode("payments", serde_json::to_value(&param.payments))?;
        let client = param
            .client
            .as_ref()
            .map(|client| encode("client", serde_json::to_value(client)))
            .transpose()?;

        let now = Utc::now();
        let purchase = entity::customer_purchase::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            folio: ActiveValue::Set(param.folio),
            iva: ActiveValue::Set(param.iva),
            subtotal: ActiveValue::Set(param.subtotal),
            total: ActiveValue::Set(param.total),
            total_letters: ActiveValue::Set(param.total_letters),
            user_id: ActiveValue::Set(param.user_id),
            station_id: ActiveValue::Set(param.station_id),
            products: ActiveValue::Set(products),
            payments: ActiveValue::Set(payments),
            client: ActiveValue::Set(client),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(CustomerPurchase::from_entity(purchase)?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<CustomerPurchase>, AppError> {
        let Some(purchase) = QueryExecutor::new(self.db).find_by_id::<Entity>(id).await? else {
            return Ok(None);
        };

        Ok(Some(CustomerPurchase::from_entity(purchase)?))
    }

    /// Lists one page of purchases matching `predicate`.
    pub async fn list(
        &self,
        predicate: Predicate<Entity>,
        query: &ListQuery,
    ) -> Result<Listing<CustomerPurchase>, AppError> {
        let listing = QueryExecutor::new(self.db)
            .list_where::<Entity>(predicate, query)
            .await?;

        Ok(listing.try_map(CustomerPurchase::from_entity)?)
    }

    pub async fn count(&self, predicate: &Predicate<Entity>) -> Result<u64, QueryError> {
        QueryExecutor::new(self.db).count_where(predicate).await
    }
}
