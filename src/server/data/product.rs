use chrono::Utc;
use entity::product::{Column, Entity, Model};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};
use uuid::Uuid;

use crate::server::{
    error::query::QueryError,
    model::product::{CreateProductParam, Product, UpdateProductParam},
    query::{
        collection::Collection,
        document::{to_document, Document},
        executor::{Listing, QueryExecutor},
        field::{Field, FieldKind, FieldValue},
        list_query::ListQuery,
        relation::Relation,
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
        name: "Name",
        key: "name",
        column: Column::Name,
        kind: FieldKind::Text,
        read: |m| m.name.clone().into(),
    },
    Field {
        name: "Description",
        key: "description",
        column: Column::Description,
        kind: FieldKind::Text,
        read: |m| m.description.clone().into(),
    },
    Field {
        name: "Price",
        key: "price",
        column: Column::Price,
        kind: FieldKind::Number,
        read: |m| m.price.into(),
    },
    Field {
        name: "PricePublic",
        key: "pricePublic",
        column: Column::PricePublic,
        kind: FieldKind::Number,
        read: |m| m.price_public.into(),
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

impl Collection for Entity {
    const NAME: &'static str = "products";

    fn fields() -> &'static [Field<Self>] {
        FIELDS
    }

    fn relations() -> &'static [Relation] {
        &[]
    }

    fn to_document(model: &Model) -> Result<Document, QueryError> {
        to_document(
            Self::NAME,
            &Product::from_entity(model.clone()).into_dto(),
        )
    }
}

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateProductParam) -> Result<Product, DbErr> {
        let now = Utc::now();
        let product = entity::product::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            price_public: ActiveValue::Set(param.price_public),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(product))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, QueryError> {
        let product = QueryExecutor::new(self.db).find_by_id::<Entity>(id).await?;

        Ok(product.map(Product::from_entity))
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Listing<Product>, QueryError> {
        let listing = QueryExecutor::new(self.db).list::<Entity>(query).await?;

        Ok(listing.map(Product::from_entity))
    }

    pub async fn count(&self, query: &ListQuery) -> Result<u64, QueryError> {
        QueryExecutor::new(self.db).count::<Entity>(query).await
    }

    /// Applies the provided fields and bumps `updated_at`.
    pub async fn update(
        &self,
        id: &str,
        param: UpdateProductParam,
    ) -> Result<Option<Product>, DbErr> {
        let Some(product) = Entity::find_by_id(id.to_string()).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = product.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(price_public) = param.price_public {
            active.price_public = ActiveValue::Set(price_public);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Product::from_entity(updated)))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id.to_string()).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
