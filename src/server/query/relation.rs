use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QuerySelect, Value};
use serde_json::Value as JsonValue;
use std::marker::PhantomData;

use crate::server::{
    error::query::QueryError,
    query::{
        collection::Collection,
        document::Document,
        field::FieldValue,
        predicate::Predicate,
        sort::{DocumentSort, SortStrategy},
    },
};

/// Fetches records of a related collection by one of its fields.
///
/// Type-erases the target collection so relation tables can be static data.
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Returns every record whose `foreign_key` field equals one of `values`,
    /// paired with that field's value for joining.
    async fn lookup(
        &self,
        db: &DatabaseConnection,
        foreign_key: &str,
        values: Vec<FieldValue>,
    ) -> Result<Vec<(FieldValue, Document)>, QueryError>;
}

/// [`Lookup`] over the collection implemented by entity `E`.
pub struct CollectionLookup<E>(PhantomData<fn() -> E>);

impl<E> CollectionLookup<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

#[async_trait]
impl<E: Collection> Lookup for CollectionLookup<E> {
    async fn lookup(
        &self,
        db: &DatabaseConnection,
        foreign_key: &str,
        values: Vec<FieldValue>,
    ) -> Result<Vec<(FieldValue, Document)>, QueryError> {
        let field = E::field_by_key(foreign_key)?;
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let models = E::find()
            .filter(field.column.is_in(values.into_iter().map(Value::from)))
            .all(db)
            .await?;

        models
            .iter()
            .map(|model| Ok((field.value_of(model), E::to_document(model)?)))
            .collect()
    }
}

/// Declared one-hop relation from a collection to another.
///
/// Keys are document keys (`stationId`, `id`). The joined value is embedded
/// under `"{entity}Embedded"`.
pub struct Relation {
    /// Name clients pass as the relation hint, e.g. `Stations`. Matched
    /// ignoring ASCII case.
    pub entity: &'static str,
    pub local_key: &'static str,
    pub foreign_key: &'static str,
    /// Embed a single object instead of an array and drop rows without a match.
    pub just_one: bool,
    pub target: &'static dyn Lookup,
}

impl Relation {
    pub fn embedded_key(&self) -> String {
        format!("{}Embedded", self.entity)
    }
}

impl std::fmt::Debug for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relation")
            .field("entity", &self.entity)
            .field("local_key", &self.local_key)
            .field("foreign_key", &self.foreign_key)
            .field("just_one", &self.just_one)
            .finish()
    }
}

/// Resolves a client relation hint against `E`'s relation table.
///
/// `stations` and `STATIONS` both name the `Stations` relation, and a
/// multi-word hint such as `paymentMethods` keeps matching `PaymentMethods`.
pub fn resolve_relation<E: Collection>(hint: &str) -> Result<&'static Relation, QueryError> {
    E::relation(hint.trim())
}

/// Runs the populate pipeline: filter, page, join, then sort the joined rows.
pub struct RelationPopulator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationPopulator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches one page of `E` matching `predicate` and embeds the related
    /// records of `relation` into each row.
    ///
    /// Paging applies to the primary rows before the join, so with
    /// `just_one` a page can come back shorter than `limit` once rows without
    /// a match are dropped. The page is cut with no `ORDER BY`, so which rows
    /// land on it is up to the store; `sort` only orders the rows within it.
    pub async fn populate<E: Collection>(
        &self,
        predicate: &Predicate<E>,
        relation: &Relation,
        sort: &DocumentSort,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Document>, QueryError> {
        let local = E::field_by_key(relation.local_key)?;

        let mut select = E::find();
        if !predicate.is_always() {
            select = select.filter(predicate.to_condition());
        }
        let models = select.offset(offset).limit(limit).all(self.db).await?;

        let mut keys: Vec<FieldValue> = Vec::new();
        for model in &models {
            let key = local.value_of(model);
            if !key.is_null() && !keys.contains(&key) {
                keys.push(key);
            }
        }

        let related = relation
            .target
            .lookup(self.db, relation.foreign_key, keys)
            .await?;

        let embedded_key = relation.embedded_key();
        let mut documents = Vec::with_capacity(models.len());
        for model in &models {
            let key = local.value_of(model);
            let mut matches = related
                .iter()
                .filter(|(foreign, _)| !key.is_null() && *foreign == key)
                .map(|(_, document)| JsonValue::Object(document.clone()));

            let embedded = if relation.just_one {
                match matches.next() {
                    Some(first) => first,
                    None => continue,
                }
            } else {
                JsonValue::Array(matches.collect())
            };

            let mut document = E::to_document(model)?;
            document.insert(embedded_key.clone(), embedded);
            documents.push(document);
        }

        sort.apply(documents)
    }
}
