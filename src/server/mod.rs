//! Server application core modules.
//!
//! This module contains all server-side functionality for Holocron: configuration, HTTP
//! routing and controllers, the service and repository layers over the SeaORM entities,
//! and error handling.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
