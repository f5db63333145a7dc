//! Error types for the Holocron server.
//!
//! Domain errors live in their own modules and are aggregated by [`Error`], which every
//! controller returns. All errors implement `IntoResponse` so they can be returned directly
//! from Axum handlers.

pub mod config;
pub mod resource;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError},
};

/// Main error type for the Holocron server.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts underlying
/// errors automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Client-caused error about users, planets, people or favorites.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Request body could not be deserialized.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Internal error indicating a bug in Holocron's code.
    #[error("Internal error with Holocron's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For missing records, empty collections and invalid request bodies
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: rejection.body_text(),
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
/// client so database details never reach the response body.
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
