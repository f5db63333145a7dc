//! Helpers shared across integration tests

use holocron::server::model::app::AppState;
use holocron_test_utils::TestContext;

/// Extension trait for TestContext to create the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}
