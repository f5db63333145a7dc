use holocron_test_utils::prelude::*;

use crate::server::{
    error::{resource::ResourceError, Error},
    model::favorite::FavoriteTarget,
    service::favorite::FavoriteService,
};
