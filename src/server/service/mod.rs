//! Service layer.
//!
//! Services validate requests, coordinate repositories and convert database models into the
//! DTOs returned by the API. Client-caused failures are reported as
//! [`ResourceError`](crate::server::error::resource::ResourceError)s.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;

use crate::server::error::resource::ResourceError;

/// Maximum length of a user's email, matching the `user.email` column
pub static EMAIL_MAX_LENGTH: usize = 120;
/// Maximum length of a user's password, matching the `user.password` column
pub static PASSWORD_MAX_LENGTH: usize = 80;
/// Maximum length of a planet or person name
pub static NAME_MAX_LENGTH: usize = 30;

/// Rejects values longer than `max` characters.
///
/// Lengths are counted in characters like `VARCHAR(n)`, not bytes.
fn ensure_max_length(field: &'static str, value: &str, max: usize) -> Result<(), ResourceError> {
    if value.chars().count() > max {
        return Err(ResourceError::FieldTooLong { field, max });
    }

    Ok(())
}
