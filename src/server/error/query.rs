use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Errors raised while compiling or executing a list query.
///
/// Everything except `Store` and `Document` is a client mistake in the
/// filter, sort or relation parameters and maps to 400 with a stable `code`.
#[derive(Error, Debug)]
pub enum QueryError {
    /// A filter token contains none of the six comparison operators.
    #[error("Malformed filter token '{0}'")]
    MalformedFilter(String),

    /// A filter or relation key names a field the collection does not have.
    #[error("Unknown field '{field}' on {collection}")]
    UnknownField {
        collection: &'static str,
        field: String,
    },

    /// The relation hint does not match any relation declared for the collection.
    #[error("Unknown relation '{relation}' on {collection}")]
    UnknownRelation {
        collection: &'static str,
        relation: String,
    },

    /// The filter value cannot be coerced into the field's kind.
    #[error("Invalid value '{value}' for {kind} field '{field}'")]
    InvalidFilterValue {
        field: String,
        kind: &'static str,
        value: String,
    },

    /// A stored record could not be rendered as a document.
    #[error("Failed to build {collection} document: {reason}")]
    Document {
        collection: &'static str,
        reason: String,
    },

    /// Failure reported by the database, including unknown sort columns.
    #[error(transparent)]
    Store(#[from] DbErr),
}

impl QueryError {
    /// Stable machine-readable code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedFilter(_) => "MalformedFilter",
            Self::UnknownField { .. } => "UnknownField",
            Self::UnknownRelation { .. } => "UnknownRelation",
            Self::InvalidFilterValue { .. } => "InvalidFilterValue",
            Self::Document { .. } | Self::Store(_) => "InternalServerError",
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        match self {
            Self::Store(_) | Self::Document { .. } => InternalServerError(self).into_response(),
            err => {
                tracing::debug!("Rejected list query: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new(err.code(), err.to_string())),
                )
                    .into_response()
            }
        }
    }
}
