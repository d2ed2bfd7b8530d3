use chrono::Utc;
use entity::station::{Column, Entity, Model};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};
use uuid::Uuid;

use crate::server::{
    error::query::QueryError,
    model::station::{CreateStationParam, Station, UpdateStationParam},
    query::{
        collection::Collection,
        document::{to_document, Document},
        executor::{Listing, QueryExecutor},
        field::{Field, FieldKind, FieldValue},
        list_query::ListQuery,
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
        name: "Name",
        key: "name",
        column: Column::Name,
        kind: FieldKind::Text,
        read: |m| m.name.clone().into(),
    },
    Field {
        name: "Email",
        key: "email",
        column: Column::Email,
        kind: FieldKind::Text,
        read: |m| m.email.clone().into(),
    },
    Field {
        name: "StationKey",
        key: "stationKey",
        column: Column::StationKey,
        kind: FieldKind::Text,
        read: |m| m.station_key.clone().into(),
    },
    Field {
        name: "Active",
        key: "active",
        column: Column::Active,
        kind: FieldKind::Boolean,
        read: |m| m.active.into(),
    },
    Field {
        name: "Street",
        key: "street",
        column: Column::Street,
        kind: FieldKind::Text,
        read: |m| m.street.clone().into(),
    },
    Field {
        name: "Outside",
        key: "outside",
        column: Column::Outside,
        kind: FieldKind::Text,
        read: |m| m.outside.clone().into(),
    },
    Field {
        name: "ZipCode",
        key: "zipCode",
        column: Column::ZipCode,
        kind: FieldKind::Text,
        read: |m| m.zip_code.clone().into(),
    },
    Field {
        name: "State",
        key: "state",
        column: Column::State,
        kind: FieldKind::Text,
        read: |m| m.state.clone().into(),
    },
    Field {
        name: "Municipality",
        key: "municipality",
        column: Column::Municipality,
        kind: FieldKind::Text,
        read: |m| m.municipality.clone().into(),
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
    entity: "Users",
    local_key: "id",
    foreign_key: "stationId",
    just_one: false,
    target: &CollectionLookup::<entity::user::Entity>::new(),
}];

impl Collection for Entity {
    const NAME: &'static str = "stations";

    fn fields() -> &'static [Field<Self>] {
        FIELDS
    }

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn to_document(model: &Model) -> Result<Document, QueryError> {
        to_document(
            Self::NAME,
            &Station::from_entity(model.clone()).into_dto(),
        )
    }
}

pub struct StationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new station with a fresh UUID and timestamps.
    pub async fn create(&self, param: CreateStationParam) -> Result<Station, DbErr> {
        let now = Utc::now();
        let station = entity::station::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            station_key: ActiveValue::Set(param.station_key),
            active: ActiveValue::Set(param.active),
            street: ActiveValue::Set(param.street),
            outside: ActiveValue::Set(param.outside),
            zip_code: ActiveValue::Set(param.zip_code),
            state: ActiveValue::Set(param.state),
            municipality: ActiveValue::Set(param.municipality),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Station::from_entity(station))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Station>, QueryError> {
        let station = QueryExecutor::new(self.db).find_by_id::<Entity>(id).await?;

        Ok(station.map(Station::from_entity))
    }

    /// Lists one page of stations; populated rows are returned as documents.
    pub async fn list(&self, query: &ListQuery) -> Result<Listing<Station>, QueryError> {
        let listing = QueryExecutor::new(self.db).list::<Entity>(query).await?;

        Ok(listing.map(Station::from_entity))
    }

    pub async fn count(&self, query: &ListQuery) -> Result<u64, QueryError> {
        QueryExecutor::new(self.db).count::<Entity>(query).await
    }

    /// Applies the provided fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Station))` - The updated station
    /// - `Ok(None)` - No station with that id
    pub async fn update(
        &self,
        id: &str,
        param: UpdateStationParam,
    ) -> Result<Option<Station>, DbErr> {
        let Some(station) = Entity::find_by_id(id.to_string()).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = station.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(station_key) = param.station_key {
            active.station_key = ActiveValue::Set(station_key);
        }
        if let Some(flag) = param.active {
            active.active = ActiveValue::Set(flag);
        }
        if let Some(street) = param.street {
            active.street = ActiveValue::Set(Some(street));
        }
        if let Some(outside) = param.outside {
            active.outside = ActiveValue::Set(Some(outside));
        }
        if let Some(zip_code) = param.zip_code {
            active.zip_code = ActiveValue::Set(Some(zip_code));
        }
        if let Some(state) = param.state {
            active.state = ActiveValue::Set(state);
        }
        if let Some(municipality) = param.municipality {
            active.municipality = ActiveValue::Set(municipality);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Station::from_entity(updated)))
    }

    /// Deletes a station by id, returning whether a row was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id.to_string()).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
