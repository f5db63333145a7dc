//! Server application models and type definitions.
//!
//! This module contains the application state shared by every handler, database model
//! type aliases with their DTO conversions, and the favorite target type.

pub mod app;
pub mod db;
pub mod favorite;
