//! Shared test utilities for the Holocron workspace.
//!
//! Tests are set up in two phases. First a [`TestBuilder`] declares which tables and
//! fixtures the test needs, then `build()` returns a [`TestContext`] holding an in-memory
//! SQLite database with everything applied. Fixture helpers on the context can insert
//! further records while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
