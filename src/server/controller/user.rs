use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get all registered users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 400, description = "No users registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all_users().await?;

    if users.is_empty() {
        return Err(ResourceError::NoUsers.into());
    }

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserDto),
        (status = 400, description = "User does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        return Err(ResourceError::UserNotFound(user_id).into());
    };

    Ok((StatusCode::OK, Json(user)))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Success when creating user", body = UserDto),
        (status = 400, description = "Missing fields or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let user = UserService::new(&state.db).create_user(payload).await?;

    Ok((StatusCode::OK, Json(user)))
}
