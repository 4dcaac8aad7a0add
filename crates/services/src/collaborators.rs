use async_trait::async_trait;
use study_core::model::{SessionState, TestSpec, TimedMinutes, UserTestId};

use crate::error::NavigationError;

/// Supplies the subscription flag at tap time. Freshness is up to the
/// implementation.
#[async_trait]
pub trait SubscriptionProvider: Send + Sync {
    async fn session_state(&self) -> SessionState;
}

/// Performs screen transitions on behalf of the study screen.
#[async_trait]
pub trait NavigationHost: Send + Sync {
    /// # Errors
    ///
    /// Returns `NavigationError` if the settings screen cannot be shown.
    async fn open_settings(&self) -> Result<(), NavigationError>;

    /// # Errors
    ///
    /// Returns `NavigationError` if the paygate cannot be presented.
    async fn open_paygate(&self) -> Result<(), NavigationError>;

    /// Run the test-taking flow for `spec`.
    ///
    /// Resolves with the id of the submitted run, or `None` if the user
    /// left without submitting.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError` if the test flow cannot be presented.
    async fn open_test(&self, spec: &TestSpec) -> Result<Option<UserTestId>, NavigationError>;

    /// # Errors
    ///
    /// Returns `NavigationError` if the results view cannot be presented.
    async fn open_results(&self, run: UserTestId, spec: &TestSpec)
    -> Result<(), NavigationError>;
}

/// Asks the user how long a timed test should last.
#[async_trait]
pub trait MinutesPicker: Send + Sync {
    /// `None` when the picker was dismissed.
    async fn pick_minutes(&self) -> Option<TimedMinutes>;
}

/// Subscription provider with a fixed answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSubscription(pub SessionState);

impl StaticSubscription {
    #[must_use]
    pub fn new(has_active_subscription: bool) -> Self {
        Self(SessionState::new(has_active_subscription))
    }
}

#[async_trait]
impl SubscriptionProvider for StaticSubscription {
    async fn session_state(&self) -> SessionState {
        self.0
    }
}

/// Picker that always answers with the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMinutes(pub Option<TimedMinutes>);

#[async_trait]
impl MinutesPicker for FixedMinutes {
    async fn pick_minutes(&self) -> Option<TimedMinutes> {
        self.0
    }
}
