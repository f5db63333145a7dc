//! Request and response bodies shared by every API endpoint.

pub mod api;
pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
