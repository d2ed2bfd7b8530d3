//! Generic list-query layer shared by every collection.
//!
//! A client filter string such as `Name=Centro,Active=true` is classified
//! token by token ([`operator`]), compiled against the collection's field
//! registry into a typed [`predicate::Predicate`], and executed by
//! [`executor::QueryExecutor`] together with a sort ([`sort`]), page bounds
//! ([`list_query`], [`paginate`]) and an optional one-hop relation
//! ([`relation`]).
//!
//! Collections opt in by implementing [`collection::Collection`] for their
//! SeaORM entity. The data layer does this for every entity.

pub mod collection;
pub mod document;
pub mod executor;
pub mod field;
pub mod list_query;
pub mod operator;
pub mod paginate;
pub mod predicate;
pub mod relation;
pub mod sort;

#[cfg(test)]
mod test;
