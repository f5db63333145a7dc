//! Test fixture modules for database record creation.
//!
//! - `user` - Users with a placeholder password
//! - `planet` - Planets with standard test values
//! - `person` - People with standard test values
//! - `favorite` - Favorite rows linking users to planets or people

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
