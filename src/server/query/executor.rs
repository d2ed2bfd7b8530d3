use sea_orm::{
    DatabaseConnection, PaginatorTrait, QueryFilter, QuerySelect, Select,
};

use crate::{
    model::api::ListDataDto,
    server::{
        error::query::QueryError,
        query::{
            collection::Collection,
            document::Document,
            list_query::ListQuery,
            predicate::{compile, Predicate},
            relation::{resolve_relation, RelationPopulator},
            sort::{resolve_sort, DocumentSort, SortStrategy, TypedSort},
        },
    },
};

/// Rows produced by a list query.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<M> {
    /// Typed records, when no relation was requested.
    Records(Vec<M>),
    /// Rendered documents with the related entity embedded.
    Populated(Vec<Document>),
}

impl<M> Listing<M> {
    /// Converts typed records, leaving populated documents as they are.
    pub fn map<N>(self, f: impl FnMut(M) -> N) -> Listing<N> {
        match self {
            Listing::Records(records) => Listing::Records(records.into_iter().map(f).collect()),
            Listing::Populated(documents) => Listing::Populated(documents),
        }
    }

    /// Fallible variant of [`Listing::map`].
    pub fn try_map<N, Err>(self, f: impl FnMut(M) -> Result<N, Err>) -> Result<Listing<N>, Err> {
        match self {
            Listing::Records(records) => Ok(Listing::Records(
                records.into_iter().map(f).collect::<Result<_, _>>()?,
            )),
            Listing::Populated(documents) => Ok(Listing::Populated(documents)),
        }
    }

    /// Renders the listing as a response payload, converting records with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(M) -> D) -> ListDataDto<D> {
        match self {
            Listing::Records(records) => ListDataDto::Records(records.into_iter().map(f).collect()),
            Listing::Populated(documents) => ListDataDto::Populated(documents),
        }
    }
}

/// Single entry point for reading collections through compiled predicates.
pub struct QueryExecutor<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of `E` for a client query.
    ///
    /// Without a relation the filter, sort, skip and limit all run in the
    /// database. With one, rows are populated and sorted as documents.
    pub async fn list<E: Collection>(
        &self,
        query: &ListQuery,
    ) -> Result<Listing<E::Model>, QueryError> {
        let predicate = compile::<E>(query.filter.as_deref())?;
        self.list_where(predicate, query).await
    }

    /// Like [`QueryExecutor::list`] with an already compiled predicate, for
    /// callers that add server-side clauses such as station scoping.
    pub async fn list_where<E: Collection>(
        &self,
        predicate: Predicate<E>,
        query: &ListQuery,
    ) -> Result<Listing<E::Model>, QueryError> {
        let spec = resolve_sort(query.sort.as_deref());

        match query.relation.as_deref() {
            None => {
                let select = TypedSort::<E>::new(spec).apply(filtered(&predicate))?;
                let records = select
                    .offset(query.skip())
                    .limit(query.page_size)
                    .all(self.db)
                    .await?;
                Ok(Listing::Records(records))
            }
            Some(hint) => {
                let relation = resolve_relation::<E>(hint)?;
                let documents = RelationPopulator::new(self.db)
                    .populate(
                        &predicate,
                        relation,
                        &DocumentSort::new(spec),
                        query.skip(),
                        query.page_size,
                    )
                    .await?;
                Ok(Listing::Populated(documents))
            }
        }
    }

    /// Counts records of `E` matching the client filter. Relation and paging
    /// parameters are ignored.
    pub async fn count<E: Collection>(&self, query: &ListQuery) -> Result<u64, QueryError> {
        let predicate = compile::<E>(query.filter.as_deref())?;
        self.count_where(&predicate).await
    }

    pub async fn count_where<E: Collection>(
        &self,
        predicate: &Predicate<E>,
    ) -> Result<u64, QueryError> {
        Ok(filtered(predicate).count(self.db).await?)
    }

    pub async fn find_one<E: Collection>(
        &self,
        predicate: &Predicate<E>,
    ) -> Result<Option<E::Model>, QueryError> {
        Ok(filtered(predicate).one(self.db).await?)
    }

    /// Finds a record by its UUID `Id` field.
    ///
    /// An `id` that is not a UUID cannot name a stored record and yields
    /// `Ok(None)`.
    pub async fn find_by_id<E: Collection>(
        &self,
        id: &str,
    ) -> Result<Option<E::Model>, QueryError> {
        let predicate = match Predicate::<E>::eq("Id", id) {
            Ok(predicate) => predicate,
            Err(QueryError::InvalidFilterValue { .. }) => return Ok(None),
            Err(err) => return Err(err),
        };
        self.find_one(&predicate).await
    }

    /// Deletes every record matching the predicate and returns how many were removed.
    pub async fn delete_many<E: Collection>(
        &self,
        predicate: &Predicate<E>,
    ) -> Result<u64, QueryError> {
        let result = E::delete_many()
            .filter(predicate.to_condition())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn filtered<E: Collection>(predicate: &Predicate<E>) -> Select<E> {
    let select = E::find();
    if predicate.is_always() {
        select
    } else {
        select.filter(predicate.to_condition())
    }
}
