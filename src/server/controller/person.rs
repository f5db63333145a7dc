use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        person::{CreatePersonDto, PersonDto},
    },
    server::{
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::person::PersonService,
    },
};

pub static PERSON_TAG: &str = "people";

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Success when retrieving people", body = Vec<PersonDto>),
        (status = 400, description = "No people registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PersonService::new(&state.db).get_all_people().await?;

    if people.is_empty() {
        return Err(ResourceError::NoPeople.into());
    }

    Ok((StatusCode::OK, Json(people)))
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PERSON_TAG,
    params(("people_id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Success when retrieving person", body = PersonDto),
        (status = 400, description = "Person does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(person) = PersonService::new(&state.db).get_person(people_id).await? else {
        return Err(ResourceError::PersonNotFound(people_id).into());
    };

    Ok((StatusCode::OK, Json(person)))
}

/// Register a new person
#[utoipa::path(
    post,
    path = "/people",
    tag = PERSON_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 200, description = "Success when creating person", body = PersonDto),
        (status = 400, description = "Missing fields or name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let person = PersonService::new(&state.db).create_person(payload).await?;

    Ok((StatusCode::OK, Json(person)))
}
