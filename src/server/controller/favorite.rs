use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{FavoriteDto, RemovedFavoritesDto},
    },
    server::{
        error::{resource::ResourceError, Error},
        model::{app::AppState, favorite::FavoriteTarget},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Get all favorites of a user
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "User does not exist or has no favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    if favorites.is_empty() {
        return Err(ResourceError::NoFavorites(user_id).into());
    }

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Success, returns the user's favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "User or planet does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Success when removing favorite", body = RemovedFavoritesDto),
        (status = 400, description = "Planet is not in the user's favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

/// Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("people_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "Success, returns the user's favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "User or person does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, user_id, FavoriteTarget::Person(people_id)).await
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("people_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "Success when removing favorite", body = RemovedFavoritesDto),
        (status = 400, description = "Person is not in the user's favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, user_id, FavoriteTarget::Person(people_id)).await
}

async fn add_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<Vec<FavoriteDto>>), Error> {
    let favorites = FavoriteService::new(&state.db)
        .add_favorite(user_id, target)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

async fn remove_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<RemovedFavoritesDto>), Error> {
    let removed = FavoriteService::new(&state.db)
        .remove_favorite(user_id, target)
        .await?;

    Ok((StatusCode::OK, Json(RemovedFavoritesDto { user_id, removed })))
}
