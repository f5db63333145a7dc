use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn planet<'a>(&'a mut self) -> PlanetFixtures<'a> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PlanetFixtures<'a> {
    /// Insert a planet with the provided name, all other columns use standard test values.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set("10465".to_string()),
                rotation_period: ActiveValue::Set("23".to_string()),
                orbital_period: ActiveValue::Set("304".to_string()),
                population: ActiveValue::Set("200000".to_string()),
                terrain: ActiveValue::Set("desert".to_string()),
                surface_water: ActiveValue::Set("1".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
