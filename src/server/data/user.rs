use chrono::Utc;
use entity::user::{Column, Entity, Model};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait,
};
use uuid::Uuid;

use crate::server::{
    error::{query::QueryError, AppError},
    model::user::{CreateUserParam, UpdateUserParam, User},
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
        name: "FirstName",
        key: "firstName",
        column: Column::FirstName,
        kind: FieldKind::Text,
        read: |m| m.first_name.clone().into(),
    },
    Field {
        name: "LastName",
        key: "lastName",
        column: Column::LastName,
        kind: FieldKind::Text,
        read: |m| m.last_name.clone().into(),
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

static RELATIONS: &[Relation] = &[Relation {
    entity: "Stations",
    local_key: "stationId",
    foreign_key: "id",
    just_one: true,
    target: &CollectionLookup::<entity::station::Entity>::new(),
}];

impl Collection for Entity {
    const NAME: &'static str = "users";

    fn fields() -> &'static [Field<Self>] {
        FIELDS
    }

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn to_document(model: &Model) -> Result<Document, QueryError> {
        let user = User::from_entity(model.clone()).map_err(|e| QueryError::Document {
            collection: Self::NAME,
            reason: e.to_string(),
        })?;

        to_document(Self::NAME, &user.into_dto())
    }
}

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user with a fresh UUID and timestamps.
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            station_id: ActiveValue::Set(param.station_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user)?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Some(user) = QueryExecutor::new(self.db).find_by_id::<Entity>(id).await? else {
            return Ok(None);
        };

        Ok(Some(User::from_entity(user)?))
    }

    /// Finds a user by email along with their stored password hash, for login.
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - The user and their argon2 hash
    /// - `Ok(None)` - No user with that email
    pub async fn find_credentials(&self, email: &str) -> Result<Option<(User, String)>, AppError> {
        let predicate = Predicate::<Entity>::eq("Email", email)?;
        let Some(user) = QueryExecutor::new(self.db).find_one(&predicate).await? else {
            return Ok(None);
        };

        let password_hash = user.password.clone();
        Ok(Some((User::from_entity(user)?, password_hash)))
    }

    /// Lists one page of users matching `predicate`.
    pub async fn list(
        &self,
        predicate: Predicate<Entity>,
        query: &ListQuery,
    ) -> Result<Listing<User>, AppError> {
        let listing = QueryExecutor::new(self.db)
            .list_where::<Entity>(predicate, query)
            .await?;

        Ok(listing.try_map(User::from_entity)?)
    }

    pub async fn count(&self, predicate: &Predicate<Entity>) -> Result<u64, QueryError> {
        QueryExecutor::new(self.db).count_where(predicate).await
    }

    /// Counts every user, regardless of role.
    pub async fn count_all(&self) -> Result<u64, AppError> {
        Ok(Entity::find().count(self.db).await?)
    }

    /// Applies the provided fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(&self, id: &str, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let Some(user) = Entity::find_by_id(id.to_string()).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = user.into_active_model();
        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = param.password_hash {
            active.password = ActiveValue::Set(password_hash);
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(station_id) = param.station_id {
            active.station_id = ActiveValue::Set(Some(station_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)?))
    }

    /// Deletes a user by id, returning whether a row was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = Entity::delete_by_id(id.to_string()).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
