//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so every
//! failure leaves a handler as a `{"error": "..."}` JSON body.

pub mod config;
pub mod mode;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, mode::ModeError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unsupported time-window mode supplied by the client.
    ///
    /// Always results in 400 Bad Request with the message `invalid mode`.
    #[error(transparent)]
    InvalidMode(#[from] ModeError),

    /// Database operation error from SeaORM without a known resource.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Database operation error while reading a specific resource.
    ///
    /// Results in 500 Internal Server Error with `failed to retrieve {resource}` returned
    /// to the client and the underlying cause logged server-side.
    #[error("failed to retrieve {resource}: {source}")]
    RetrieveErr {
        /// Name of the resource being read, e.g. `regions`
        resource: &'static str,
        /// The underlying database error
        #[source]
        source: sea_orm::DbErr,
    },

    /// The database could not be reached during startup.
    #[error("failed to connect to the database after {attempts} attempts: {source}")]
    DatabaseUnavailable {
        /// Number of connection attempts made
        attempts: u32,
        /// Error from the final attempt
        #[source]
        source: sea_orm::DbErr,
    },

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Attaches the resource being read to a bare database error.
    ///
    /// Non-database errors are returned unchanged so that `invalid mode` and not-found
    /// responses keep their status codes.
    ///
    /// # Arguments
    /// - `resource` - Name used in the client-facing `failed to retrieve {resource}` message
    pub fn while_retrieving(self, resource: &'static str) -> Self {
        match self {
            Self::DbErr(source) => Self::RetrieveErr { resource, source },
            other => other,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `InvalidMode`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For everything else; the cause is logged and the
///   client receives a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::InvalidMode(err) => {
                tracing::debug!("Rejected request: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "invalid mode".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::RetrieveErr { resource, source } => {
                tracing::error!("Failed to retrieve {}: {}", resource, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: format!("failed to retrieve {}", resource),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
