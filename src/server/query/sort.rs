use convert_case::{Case, Casing};
use sea_orm::{DbErr, EntityTrait, Order, QueryOrder, Select};
use std::{marker::PhantomData, str::FromStr};

use crate::server::{
    error::query::QueryError,
    query::document::{compare_values, get_path, Document},
};

/// Sort applied when the client gives none: most recent first.
pub const DEFAULT_SORT_FIELD: &str = "createdAt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl From<Direction> for Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Ascending => Order::Asc,
            Direction::Descending => Order::Desc,
        }
    }
}

/// A resolved sort token. `field` is the camelCase document key, possibly a
/// dotted path into an embedded relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: Direction,
}

/// Resolves a client sort token.
///
/// Blank means descending `createdAt`; a leading `-` means descending on the
/// rest of the token; anything else is ascending on the whole token. Field
/// names are not checked here.
pub fn resolve_sort(token: Option<&str>) -> SortSpec {
    let token = token.map(str::trim).unwrap_or_default();

    if token.is_empty() {
        return SortSpec {
            field: DEFAULT_SORT_FIELD.to_string(),
            direction: Direction::Descending,
        };
    }

    match token.strip_prefix('-') {
        Some(rest) => SortSpec {
            field: rest.trim().to_string(),
            direction: Direction::Descending,
        },
        None => SortSpec {
            field: token.to_string(),
            direction: Direction::Ascending,
        },
    }
}

/// Applies a sort to some query or result shape.
pub trait SortStrategy<T> {
    fn apply(&self, target: T) -> Result<T, QueryError>;
}

/// Sort pushed down to the database as `ORDER BY` on a typed select.
///
/// The camelCase field is mapped to its snake_case column; a name that is not
/// a column of `E` fails as a store error.
pub struct TypedSort<E> {
    spec: SortSpec,
    entity: PhantomData<fn() -> E>,
}

impl<E> TypedSort<E> {
    pub fn new(spec: SortSpec) -> Self {
        Self {
            spec,
            entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> SortStrategy<Select<E>> for TypedSort<E> {
    fn apply(&self, select: Select<E>) -> Result<Select<E>, QueryError> {
        let column_name = self.spec.field.to_case(Case::Snake);
        let column = E::Column::from_str(&column_name).map_err(|_| {
            DbErr::Custom(format!(
                "no such column '{}' on table '{}'",
                column_name,
                E::default().table_name()
            ))
        })?;

        Ok(select.order_by(column, self.spec.direction.into()))
    }
}

/// In-process sort over rendered documents, used after relation population
/// where rows no longer have a typed shape.
///
/// Stable, so rows with equal keys keep their fetch order.
pub struct DocumentSort {
    spec: SortSpec,
}

impl DocumentSort {
    pub fn new(spec: SortSpec) -> Self {
        Self { spec }
    }
}

impl SortStrategy<Vec<Document>> for DocumentSort {
    fn apply(&self, mut documents: Vec<Document>) -> Result<Vec<Document>, QueryError> {
        documents.sort_by(|a, b| {
            let ordering = compare_values(
                get_path(a, &self.spec.field),
                get_path(b, &self.spec.field),
            );
            match self.spec.direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });

        Ok(documents)
    }
}
