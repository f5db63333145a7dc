//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_resource_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    planets: Vec<String>,
    people: Vec<String>,
    favorite_planets: Vec<(i32, i32)>, // (user_id, planet_id)
    favorite_people: Vec<(i32, i32)>,  // (user_id, person_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_resource_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            people: Vec::new(),
            favorite_planets: Vec::new(),
            favorite_people: Vec::new(),
        }
    }

    /// Add every table served by the API to the test database.
    ///
    /// Creates User, Planet, Person and Favorite in dependency order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_resource_tables(mut self) -> Self {
        self.include_resource_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active user with the provided email and a placeholder password.
    pub fn with_mock_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a planet with the provided name and standard test values.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a person with the provided name and standard test values.
    pub fn with_mock_person(mut self, name: impl Into<String>) -> Self {
        self.people.push(name.into());
        self
    }

    /// Mark a planet as a favorite of a user.
    ///
    /// IDs refer to records inserted by this builder, which are numbered from 1 in the
    /// order they were queued.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Mark a person as a favorite of a user.
    ///
    /// IDs refer to records inserted by this builder, which are numbered from 1 in the
    /// order they were queued.
    pub fn with_favorite_person(mut self, user_id: i32, person_id: i32) -> Self {
        self.favorite_people.push((user_id, person_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (resource tables if specified, then custom tables)
    /// 2. Inserts users, planets and people
    /// 3. Inserts favorites
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_resource_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert resources
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for name in self.planets {
            setup.planet().insert_mock_planet(&name).await?;
        }

        for name in self.people {
            setup.person().insert_mock_person(&name).await?;
        }

        // 3. Insert favorites
        for (user_id, planet_id) in self.favorite_planets {
            setup
                .favorite()
                .insert_favorite_planet(user_id, planet_id)
                .await?;
        }

        for (user_id, person_id) in self.favorite_people {
            setup
                .favorite()
                .insert_favorite_person(user_id, person_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
