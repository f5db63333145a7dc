use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert(user_id, None, Some(planet_id)).await
    }

    pub async fn insert_favorite_person(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert(user_id, Some(person_id), None).await
    }

    async fn insert(
        &self,
        user_id: i32,
        person_id: Option<i32>,
        homeworld_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                person_id: ActiveValue::Set(person_id),
                homeworld_id: ActiveValue::Set(homeworld_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
