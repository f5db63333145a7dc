use serde::{Deserialize, Serialize};

use crate::model::{person::PersonDto, planet::PlanetDto};

/// A favorite entry of a user.
///
/// Exactly one of `person` or `planet` is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub person: Option<PersonDto>,
    pub planet: Option<PlanetDto>,
}

/// Response of removing a favorite planet or person
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RemovedFavoritesDto {
    pub user_id: i32,
    /// Number of favorite entries removed
    pub removed: u64,
}
