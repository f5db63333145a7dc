//! Database model type aliases.
//!
//! This module provides type aliases for the SeaORM entity models used throughout the
//! server, along with their conversions into API response bodies.

use crate::model::{person::PersonDto, planet::PlanetDto, user::UserDto};

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address
/// - `password` - Stored password, never serialized
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for person database model.
pub type PersonModel = entity::person::Model;

/// Type alias for favorite database model.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `person_id` - Foreign key to the favorite person, set for person favorites only
/// - `homeworld_id` - Foreign key to the favorite planet, set for planet favorites only
pub type FavoriteModel = entity::favorite::Model;

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            population: planet.population,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
        }
    }
}

impl From<PersonModel> for PersonDto {
    fn from(person: PersonModel) -> Self {
        Self {
            id: person.id,
            name: person.name,
            birth_year: person.birth_year,
            eye_color: person.eye_color,
            gender: person.gender,
            hair_color: person.hair_color,
            height: person.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_dto_omits_password() {
        let user = UserModel {
            id: 1,
            email: "leia@alderaan.com".to_string(),
            password: "hunter2".to_string(),
            is_active: true,
        };

        let json = serde_json::to_value(UserDto::from(user)).unwrap();

        assert_eq!(json["email"], "leia@alderaan.com");
        assert!(json.get("password").is_none());
    }
}
