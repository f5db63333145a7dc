//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and exposes fixture helpers for inserting records.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_resource_tables().build().await?;
///
/// // Access fixture helpers
/// let user = test.user().insert_user("luke@tatooine.com").await?;
/// let planet = test.planet().insert_mock_planet("Tatooine").await?;
/// test.favorite().insert_favorite_planet(user.id, planet.id).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to the server's `AppState` without creating a circular
    /// dependency between the test-utils crate and the main holocron crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
