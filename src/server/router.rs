//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /users` - List users
/// - `POST /users` - Create a user
/// - `GET /users/{user_id}` - Get a user
/// - `GET /planets` - List planets
/// - `POST /planets` - Create a planet
/// - `GET /planets/{planet_id}` - Get a planet
/// - `GET /people` - List people
/// - `POST /people` - Create a person
/// - `GET /people/{people_id}` - Get a person
/// - `GET /user/{user_id}/favorites` - List a user's favorites
/// - `POST|DELETE /user/{user_id}/favorite/planet/{planet_id}` - Add or remove a favorite planet
/// - `POST|DELETE /user/{user_id}/favorite/people/{people_id}` - Add or remove a favorite person
///
/// `/user` is also accepted in place of `/users` for listing and creating users, it is left
/// out of the OpenAPI document.
///
/// # Returns
/// An Axum `Router<AppState>` ready to have its state provided.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::person::PERSON_TAG, description = "People API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorites API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_all_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(
            controller::planet::get_all_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::person::get_all_people,
            controller::person::create_person
        ))
        .routes(routes!(controller::person::get_person))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .split_for_parts();

    routes
        .route(
            "/user",
            get(controller::user::get_all_users).post(controller::user::create_user),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
