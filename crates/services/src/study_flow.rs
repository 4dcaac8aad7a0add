use std::sync::Arc;

use study_core::model::{NavigationIntent, SelectionEvent, SessionState, TestSpec, UserTestId};
use study_core::{Clock, Dispatch, dispatch, resolve_timed, settings_tapped};
use tracing::{debug, info};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::collaborators::{MinutesPicker, NavigationHost, SubscriptionProvider};
use crate::error::StudyFlowError;

/// What a selection ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyOutcome {
    /// Informational row; nothing happened.
    Ignored,
    /// A screen was opened (settings or paygate).
    Navigated(NavigationIntent),
    /// The timed picker was dismissed; no test was started.
    TimedCancelled,
    /// The test flow closed without a submission.
    TestDismissed(TestSpec),
    /// The test was submitted and its results opened.
    TestSubmitted { run: UserTestId, spec: TestSpec },
}

/// Performs the side effects of study-screen taps.
///
/// Decisions come from `study_core::dispatch`; this type only reads the
/// subscription flag, logs analytics and drives the navigation host.
#[derive(Clone)]
pub struct StudyFlow {
    clock: Clock,
    subscription: Arc<dyn SubscriptionProvider>,
    navigation: Arc<dyn NavigationHost>,
    minutes: Arc<dyn MinutesPicker>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl StudyFlow {
    #[must_use]
    pub fn new(
        clock: Clock,
        subscription: Arc<dyn SubscriptionProvider>,
        navigation: Arc<dyn NavigationHost>,
        minutes: Arc<dyn MinutesPicker>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            clock,
            subscription,
            navigation,
            minutes,
            analytics,
        }
    }

    /// Record which exam the study screen is showing.
    pub fn screen_opened(&self, course_name: &str) {
        self.analytics
            .log_event(AnalyticsEvent::study_screen(course_name, self.clock.now()));
    }

    /// # Errors
    ///
    /// Returns `StudyFlowError::Navigation` if the host cannot open settings.
    pub async fn settings_tapped(&self) -> Result<StudyOutcome, StudyFlowError> {
        let Dispatch { intent, tag } = settings_tapped();
        self.navigation.open_settings().await?;
        if let Some(tag) = tag {
            self.analytics
                .log_event(AnalyticsEvent::study_tap(tag, self.clock.now()));
        }
        Ok(StudyOutcome::Navigated(intent))
    }

    /// Handle a tap on a study-screen row.
    ///
    /// The subscription flag is read once; the timed second step reuses it.
    ///
    /// # Errors
    ///
    /// Returns `StudyFlowError::Navigation` when the host fails to present a
    /// screen. Analytics for the tap are logged before navigation starts.
    pub async fn select(&self, event: SelectionEvent) -> Result<StudyOutcome, StudyFlowError> {
        let session = self.subscription.session_state().await;
        let Dispatch { intent, tag } = dispatch(event, session);
        debug!(?event, ?intent, gated = session.gated(), "study selection");

        if let Some(tag) = tag {
            self.analytics
                .log_event(AnalyticsEvent::study_tap(tag, self.clock.now()));
        }

        self.perform(intent, session).await
    }

    async fn perform(
        &self,
        intent: NavigationIntent,
        session: SessionState,
    ) -> Result<StudyOutcome, StudyFlowError> {
        match intent {
            NavigationIntent::NoOp => Ok(StudyOutcome::Ignored),
            NavigationIntent::OpenSettings => {
                self.navigation.open_settings().await?;
                Ok(StudyOutcome::Navigated(intent))
            }
            NavigationIntent::OpenPaygate => {
                self.navigation.open_paygate().await?;
                Ok(StudyOutcome::Navigated(intent))
            }
            NavigationIntent::OpenTimedPicker => {
                let Some(minutes) = self.minutes.pick_minutes().await else {
                    debug!("timed picker dismissed");
                    return Ok(StudyOutcome::TimedCancelled);
                };
                match resolve_timed(minutes, session) {
                    NavigationIntent::StartTest(spec) => self.run_test(spec).await,
                    _ => Ok(StudyOutcome::Ignored),
                }
            }
            NavigationIntent::StartTest(spec) => self.run_test(spec).await,
        }
    }

    async fn run_test(&self, spec: TestSpec) -> Result<StudyOutcome, StudyFlowError> {
        let Some(run) = self.navigation.open_test(&spec).await? else {
            return Ok(StudyOutcome::TestDismissed(spec));
        };

        info!(%run, kind = ?spec.kind, "test submitted");
        self.navigation.open_results(run, &spec).await?;
        Ok(StudyOutcome::TestSubmitted { run, spec })
    }
}

/// The preloader shows only while loading with nothing on screen yet.
#[must_use]
pub fn preloader_visible(sections_empty: bool, loading: bool) -> bool {
    sections_empty && loading
}
