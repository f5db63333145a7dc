//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each and return `DbErr` on failure,
//! leaving HTTP semantics to the service and controller layers.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
