use std::fmt;

use crate::server::model::db::FavoriteModel;

/// What a favorite entry points at.
///
/// A favorite row stores the target in one of two nullable columns, this type is the only
/// way the server creates or matches favorites so a row can never hold both or neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    /// Person (character) record ID, stored in `person_id`
    Person(i32),
    /// Planet record ID, stored in `homeworld_id`
    Planet(i32),
}

impl FavoriteTarget {
    /// Value for the `person_id` column
    pub fn person_id(&self) -> Option<i32> {
        match self {
            Self::Person(id) => Some(*id),
            Self::Planet(_) => None,
        }
    }

    /// Value for the `homeworld_id` column
    pub fn planet_id(&self) -> Option<i32> {
        match self {
            Self::Person(_) => None,
            Self::Planet(id) => Some(*id),
        }
    }

    /// Name of the target used in client facing messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Person(_) => "character",
            Self::Planet(_) => "planet",
        }
    }

    /// Reads the target back out of a stored favorite.
    ///
    /// Returns `None` for rows with both or neither column set.
    pub fn from_model(favorite: &FavoriteModel) -> Option<Self> {
        match (favorite.person_id, favorite.homeworld_id) {
            (Some(person_id), None) => Some(Self::Person(person_id)),
            (None, Some(planet_id)) => Some(Self::Planet(planet_id)),
            _ => None,
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(id) => write!(f, "character {}", id),
            Self::Planet(id) => write!(f, "planet {}", id),
        }
    }
}
