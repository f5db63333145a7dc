use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::favorite::FavoriteTarget};

/// Errors caused by the client asking for records that don't exist or sending invalid data.
///
/// Every variant is reported as 400 Bad Request with its message as the response body,
/// including lookups of missing records and empty collections.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("User {0} does not exist")]
    UserNotFound(i32),
    #[error("The planet with id {0} does not exist")]
    PlanetNotFound(i32),
    #[error("The person with id {0} does not exist")]
    PersonNotFound(i32),
    #[error("There are no users registered in the platform.")]
    NoUsers,
    #[error("There are no planets registered in the platform.")]
    NoPlanets,
    #[error("There are no people registered in the platform.")]
    NoPeople,
    #[error("There are no favorites for this user.")]
    NoFavorites(i32),
    #[error("This {} is not in user {user_id}'s favorites", .target.kind())]
    FavoriteNotFound {
        user_id: i32,
        target: FavoriteTarget,
    },
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),
    #[error("A planet named {0} already exists")]
    DuplicatePlanet(String),
    #[error("A person named {0} already exists")]
    DuplicatePerson(String),
    #[error("No {0} was provided")]
    MissingField(&'static str),
    #[error("The {field} must be at most {max} characters long")]
    FieldTooLong { field: &'static str, max: usize },
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
