use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
}

/// Body of `POST /people`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePersonDto {
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
}
