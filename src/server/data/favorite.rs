use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite entry for the user pointing at the provided target
    ///
    /// Does not check for an existing entry, the same target may be added more than once.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(target.person_id()),
            homeworld_id: ActiveValue::Set(target.planet_id()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets the favorites of a user ordered by ID
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every favorite of the user pointing at the provided target
    ///
    /// Returns OK regardless of any entry existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<DeleteResult, DbErr> {
        let target_filter = match target {
            FavoriteTarget::Person(person_id) => {
                entity::favorite::Column::PersonId.eq(person_id)
            }
            FavoriteTarget::Planet(planet_id) => {
                entity::favorite::Column::HomeworldId.eq(planet_id)
            }
        };

        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_filter)
            .exec(self.db)
            .await
    }
}
