use sea_orm::EntityTrait;

use crate::server::{
    error::query::QueryError,
    query::{document::Document, field::Field, relation::Relation},
};

/// A SeaORM entity exposed to the list-query layer.
///
/// Implementors declare the fields clients may filter on and the relations
/// they may populate. Both tables are static so lookups never allocate.
pub trait Collection: EntityTrait<Model: Sync> {
    /// Collection name used in error messages, change events and realtime paths.
    const NAME: &'static str;

    /// Every filterable field, keyed by its PascalCase filter name.
    fn fields() -> &'static [Field<Self>];

    /// One-hop relations this collection can populate.
    fn relations() -> &'static [Relation];

    /// Renders a stored record as the JSON document clients receive.
    fn to_document(model: &Self::Model) -> Result<Document, QueryError>;

    /// Resolves a filter key by case-sensitive exact name.
    fn field(name: &str) -> Result<&'static Field<Self>, QueryError> {
        Self::fields()
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| QueryError::UnknownField {
                collection: Self::NAME,
                field: name.to_string(),
            })
    }

    /// Resolves a field by its document key (`stationId`), as used in relation maps.
    fn field_by_key(key: &str) -> Result<&'static Field<Self>, QueryError> {
        Self::fields()
            .iter()
            .find(|field| field.key == key)
            .ok_or_else(|| QueryError::UnknownField {
                collection: Self::NAME,
                field: key.to_string(),
            })
    }

    /// Resolves a relation by entity name (`Stations`), ignoring ASCII case.
    fn relation(entity: &str) -> Result<&'static Relation, QueryError> {
        Self::relations()
            .iter()
            .find(|relation| relation.entity.eq_ignore_ascii_case(entity))
            .ok_or_else(|| QueryError::UnknownRelation {
                collection: Self::NAME,
                relation: entity.to_string(),
            })
    }
}
