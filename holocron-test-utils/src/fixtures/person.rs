use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn person<'a>(&'a mut self) -> PersonFixtures<'a> {
        PersonFixtures { setup: self }
    }
}

pub struct PersonFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PersonFixtures<'a> {
    /// Insert a person with the provided name, all other columns use standard test values.
    pub async fn insert_mock_person(&self, name: &str) -> Result<entity::person::Model, TestError> {
        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                birth_year: ActiveValue::Set("19BBY".to_string()),
                eye_color: ActiveValue::Set("blue".to_string()),
                gender: ActiveValue::Set("male".to_string()),
                hair_color: ActiveValue::Set("blond".to_string()),
                height: ActiveValue::Set("172".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
