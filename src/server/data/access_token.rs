use chrono::{DateTime, Utc};
use entity::access_token::{Column, Entity, Model};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::{
    error::query::QueryError,
    query::{
        collection::Collection,
        document::Document,
        executor::QueryExecutor,
        field::{Field, FieldKind, FieldValue},
        operator::Operator,
        predicate::Predicate,
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
        name: "Token",
        key: "token",
        column: Column::Token,
        kind: FieldKind::Text,
        read: |m| m.token.clone().into(),
    },
    Field {
        name: "UserId",
        key: "userId",
        column: Column::UserId,
        kind: FieldKind::Id,
        read: |m| FieldValue::Id(m.user_id.clone()),
    },
    Field {
        name: "Email",
        key: "email",
        column: Column::Email,
        kind: FieldKind::Text,
        read: |m| m.email.clone().into(),
    },
    Field {
        name: "Role",
        key: "role",
        column: Column::Role,
        kind: FieldKind::Text,
        read: |m| m.role.clone().into(),
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
    const NAME: &'static str = "access_tokens";

    fn fields() -> &'static [Field<Self>] {
        FIELDS
    }

    fn relations() -> &'static [Relation] {
        &[]
    }

    /// Sessions are never listed to clients, so the token itself is omitted.
    fn to_document(model: &Model) -> Result<Document, QueryError> {
        let value = serde_json::json!({
            "id": model.id,
            "userId": model.user_id,
            "email": model.email,
            "role": model.role,
            "createdAt": model.created_at,
            "updatedAt": model.updated_at,
        });

        match value {
            serde_json::Value::Object(document) => Ok(document),
            _ => Err(QueryError::Document {
                collection: Self::NAME,
                reason: "session did not render as an object".to_string(),
            }),
        }
    }
}

/// Fields recorded for a newly issued session.
#[derive(Debug, Clone)]
pub struct CreateAccessTokenParam {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub role: String,
}

pub struct AccessTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAccessTokenParam) -> Result<Model, DbErr> {
        let now = Utc::now();
        entity::access_token::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            token: ActiveValue::Set(param.token),
            user_id: ActiveValue::Set(param.user_id),
            email: ActiveValue::Set(param.email),
            role: ActiveValue::Set(param.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<Model>, QueryError> {
        let predicate = Predicate::<Entity>::eq("Token", token)?;

        QueryExecutor::new(self.db).find_one(&predicate).await
    }

    /// Deletes the session holding `token`, returning how many rows were removed.
    pub async fn delete_by_token(&self, token: &str) -> Result<u64, QueryError> {
        let predicate = Predicate::<Entity>::eq("Token", token)?;

        QueryExecutor::new(self.db).delete_many(&predicate).await
    }

    /// Deletes every session created before `cutoff`.
    pub async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, QueryError> {
        let predicate = Predicate::<Entity>::compare_value("CreatedAt", Operator::Less, cutoff)?;

        QueryExecutor::new(self.db).delete_many(&predicate).await
    }
}
