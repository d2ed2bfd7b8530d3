//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler. It wraps the
//! domain errors (`AuthError`, `QueryError`, `ConfigError`, `InternalError`)
//! and converts each into the `{status: false, message, code}` envelope with
//! the matching HTTP status. Internal failures are logged server-side and
//! reported to clients with a generic message only.

pub mod auth;
pub mod config;
pub mod internal;
pub mod query;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, query::QueryError,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` so `?` converts domain errors automatically.
/// `AuthError` and `QueryError` carry their own response mapping; the generic
/// variants map to 400, 404 and 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 / 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Filter, sort or relation error raised by the list-query layer.
    ///
    /// Client mistakes map to 400; store failures map to 500.
    #[error(transparent)]
    QueryErr(#[from] QueryError),

    /// Database operation error from SeaORM.
    ///
    /// Unique-constraint violations map to 409 Conflict, anything else to 500.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected inconsistency inside the application.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Socket or filesystem failure while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found, e.g. code `StationNotFound`.
    #[error("{message}")]
    NotFound { code: String, message: String },

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request, e.g. code `InvalidObjectId`.
    #[error("{message}")]
    BadRequest { code: String, message: String },

    /// Internal server error with custom message.
    ///
    /// The message is logged and a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and client-side `QueryErr` variants
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For unique-constraint violations
/// - 500 Internal Server Error - For every other error, logged server-side
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::QueryErr(err) => err.into_response(),
            Self::NotFound { code, message } => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(code, message))).into_response()
            }
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(code, message))).into_response()
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto::new(
                            "DuplicateKey",
                            "A record with the same unique value already exists",
                        )),
                    )
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error_body()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to
/// avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        internal_error_body()
    }
}

fn internal_error_body() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto::new("InternalServerError", "Internal server error")),
    )
        .into_response()
}
