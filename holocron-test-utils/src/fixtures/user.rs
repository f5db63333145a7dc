use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Password stored for every fixture user.
pub static TEST_PASSWORD: &str = "password";

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the provided email.
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(TEST_PASSWORD.to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
