//! SeaORM entities for the Holocron database.

pub mod prelude;

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
