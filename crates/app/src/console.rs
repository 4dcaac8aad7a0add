use async_trait::async_trait;
use services::{NavigationError, NavigationHost};
use study_core::model::{TestSpec, UserTestId};
use tracing::info;

/// Navigation host for the terminal: logs each transition instead of
/// presenting a screen.
pub struct ConsoleHost {
    /// Run id reported when a test "finishes"; `None` simulates leaving the
    /// test without submitting.
    pub submit_as: Option<UserTestId>,
}

#[async_trait]
impl NavigationHost for ConsoleHost {
    async fn open_settings(&self) -> Result<(), NavigationError> {
        info!("push settings");
        Ok(())
    }

    async fn open_paygate(&self) -> Result<(), NavigationError> {
        info!("present paygate");
        Ok(())
    }

    async fn open_test(&self, spec: &TestSpec) -> Result<Option<UserTestId>, NavigationError> {
        info!(kind = ?spec.kind, gated = spec.gated, "present test");
        Ok(self.submit_as)
    }

    async fn open_results(&self, run: UserTestId, spec: &TestSpec) -> Result<(), NavigationError> {
        info!(%run, kind = ?spec.kind, "present test stats");
        Ok(())
    }
}
