use serde::{Deserialize, Serialize};

/// A user as returned by the API, the password is never included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

/// Body of `POST /users`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
}
