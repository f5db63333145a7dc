//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes for
//! success, client errors and database failures.

mod favorite;
mod person;
mod planet;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron_test_utils::prelude::*;

use crate::util::TestContextExt;
