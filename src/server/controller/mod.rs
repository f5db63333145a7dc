//! HTTP controller endpoints for the Holocron web API.
//!
//! Controllers extract path parameters and request bodies, call the matching service and map
//! missing records or empty collections to the 400 responses the API documents. They are
//! annotated with utoipa for OpenAPI documentation.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
