//! Favorites service.
//!
//! Links users to favorite planets and people. Every favorite is created from a
//! [`FavoriteTarget`] so exactly one of its two target columns is ever set.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{favorite::FavoriteDto, person::PersonDto, planet::PlanetDto},
    server::{
        data::{
            favorite::FavoriteRepository, person::PersonRepository, planet::PlanetRepository,
            user::UserRepository,
        },
        error::{resource::ResourceError, Error},
        model::{db::FavoriteModel, favorite::FavoriteTarget},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every favorite of a user with its planet or person resolved.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites to retrieve
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - Favorites ordered by ID, possibly empty
    /// - `Err(Error::ResourceError(UserNotFound))` - User does not exist
    /// - `Err(Error::InternalError)` - A stored favorite has no valid target
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        ensure_user_exists(self.db, user_id).await?;

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        resolve_favorites(self.db, favorites).await
    }

    /// Adds a planet or person to a user's favorites.
    ///
    /// The user and target are checked and the favorite inserted within a single
    /// transaction. The same target may be added more than once.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - The user's favorites including the new entry
    /// - `Err(Error::ResourceError(UserNotFound))` - User does not exist
    /// - `Err(Error::ResourceError(PlanetNotFound | PersonNotFound))` - Target does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Vec<FavoriteDto>, Error> {
        let txn = self.db.begin().await?;

        ensure_user_exists(&txn, user_id).await?;
        ensure_target_exists(&txn, target).await?;

        let favorite = FavoriteRepository::new(&txn).create(user_id, target).await?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            favorite_id = %favorite.id,
            "Added {} to favorites",
            target
        );

        self.get_user_favorites(user_id).await
    }

    /// Removes every favorite entry of a user pointing at the provided target.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed, always at least 1
    /// - `Err(Error::ResourceError(FavoriteNotFound))` - No matching entry
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<u64, Error> {
        let result = FavoriteRepository::new(self.db)
            .delete_by_target(user_id, target)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::FavoriteNotFound { user_id, target }.into());
        }

        tracing::info!(
            user_id = %user_id,
            removed = %result.rows_affected,
            "Removed {} from favorites",
            target
        );

        Ok(result.rows_affected)
    }
}

async fn ensure_user_exists<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), Error> {
    match UserRepository::new(db).get_by_id(user_id).await? {
        Some(_) => Ok(()),
        None => Err(ResourceError::UserNotFound(user_id).into()),
    }
}

async fn ensure_target_exists<C: ConnectionTrait>(
    db: &C,
    target: FavoriteTarget,
) -> Result<(), Error> {
    match target {
        FavoriteTarget::Planet(planet_id) => {
            if PlanetRepository::new(db).get_by_id(planet_id).await?.is_none() {
                return Err(ResourceError::PlanetNotFound(planet_id).into());
            }
        }
        FavoriteTarget::Person(person_id) => {
            if PersonRepository::new(db).get_by_id(person_id).await?.is_none() {
                return Err(ResourceError::PersonNotFound(person_id).into());
            }
        }
    }

    Ok(())
}

/// Loads the planets and people referenced by the favorites and pairs them up.
async fn resolve_favorites<C: ConnectionTrait>(
    db: &C,
    favorites: Vec<FavoriteModel>,
) -> Result<Vec<FavoriteDto>, Error> {
    let targets = favorites
        .iter()
        .map(|favorite| {
            FavoriteTarget::from_model(favorite).ok_or_else(|| {
                // Would only occur if a row was written outside of the favorites service
                // on a database without the check constraint
                Error::InternalError(format!(
                    "Favorite ID {} of user ID {} must reference exactly one person or planet",
                    favorite.id, favorite.user_id
                ))
            })
        })
        .collect::<Result<Vec<FavoriteTarget>, Error>>()?;

    let person_ids: Vec<i32> = targets.iter().filter_map(|t| t.person_id()).collect();
    let planet_ids: Vec<i32> = targets.iter().filter_map(|t| t.planet_id()).collect();

    let people: HashMap<i32, PersonDto> = PersonRepository::new(db)
        .get_many_by_ids(&person_ids)
        .await?
        .into_iter()
        .map(|person| (person.id, person.into()))
        .collect();
    let planets: HashMap<i32, PlanetDto> = PlanetRepository::new(db)
        .get_many_by_ids(&planet_ids)
        .await?
        .into_iter()
        .map(|planet| (planet.id, planet.into()))
        .collect();

    favorites
        .into_iter()
        .zip(targets)
        .map(|(favorite, target)| {
            let (person, planet) = match target {
                FavoriteTarget::Person(id) => (people.get(&id).cloned(), None),
                FavoriteTarget::Planet(id) => (None, planets.get(&id).cloned()),
            };

            if person.is_none() && planet.is_none() {
                // Would only occur if the foreign key constraints are not enforced
                return Err(Error::InternalError(format!(
                    "Failed to find {} referenced by favorite ID {}",
                    target, favorite.id
                )));
            }

            Ok(FavoriteDto {
                id: favorite.id,
                person,
                planet,
            })
        })
        .collect()
}
