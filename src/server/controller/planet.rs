use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 400, description = "No planets registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_all_planets().await?;

    if planets.is_empty() {
        return Err(ResourceError::NoPlanets.into());
    }

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 400, description = "Planet does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(planet) = PlanetService::new(&state.db).get_planet(planet_id).await? else {
        return Err(ResourceError::PlanetNotFound(planet_id).into());
    };

    Ok((StatusCode::OK, Json(planet)))
}

/// Register a new planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Success when creating planet", body = PlanetDto),
        (status = 400, description = "Missing fields or name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let planet = PlanetService::new(&state.db).create_planet(payload).await?;

    Ok((StatusCode::OK, Json(planet)))
}
