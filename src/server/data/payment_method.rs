use chrono::Utc;
use entity::payment_method::{Column, Entity, Model};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};
use uuid::Uuid;

use crate::server::{
    error::query::QueryError,
    model::payment_method::{
        CreatePaymentMethodParam, PaymentMethod, UpdatePaymentMethodParam,
    },
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
        name: "Key",
        key: "key",
        column: Column::Key,
        kind: FieldKind::Text,
        read: |m| m.key.clone().into(),
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
        name: "Status",
        key: "status",
        column: Column::Status,
        kind: FieldKind::Boolean,
        read: |m| m.status.into(),
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
    const NAME: &'static str = "payments";

    fn fields() -> &'static [Field<Self>] {
        FIELDS
    }

    fn relations() -> &'static [Relation] {
        &[]
    }

    fn to_document(model: &Model) -> Result<Document, QueryError> {
        to_document(
            Self::NAME,
            &PaymentMethod::from_entity(model.clone()).into_dto(),
        )
    }
}

pub struct PaymentMethodRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentMethodRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePaymentMethodParam) -> Result<PaymentMethod, DbErr> {
        let now = Utc::now();
        let payment_method = entity::payment_method::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            key: ActiveValue::Set(param.key),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(param.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(PaymentMethod::from_entity(payment_method))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<PaymentMethod>, QueryError> {
        let payment_method = QueryExecutor::new(self.db).find_by_id::<Entity>(id).await?;

        Ok(payment_method.map(PaymentMethod::from_entity))
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Listing<PaymentMethod>, QueryError> {
        let listing = QueryExecutor::new(self.db).list::<Entity>(query).await?;

        Ok(listing.map(PaymentMethod::from_entity))
    }

    pub async fn count(&self, query: &ListQuery) -> Result<u64, QueryError> {
        QueryExecutor::new(self.db).count::<Entity>(query).await
    }

    pub async fn update(
        &self,
        id: &str,
        param: UpdatePaymentMethodParam,
    ) -> Result<Option<PaymentMethod>, DbErr> {
        let Some(payment_method) = Entity::find_by_id(id.to_string()).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = payment_method.into_active_model();
        if let Some(key) = param.key {
            active.key = ActiveValue::Set(key);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(PaymentMethod::from_entity(updated)))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id.to_string()).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
