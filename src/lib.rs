//! Holocron: a REST backend for users, planets, people and their favorites.

pub mod model;
pub mod server;
