use serde::{Deserialize, Serialize};

/// Test mode offered as a tile on the study screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    TenQuestions,
    Random,
    Missed,
    DailyQuestion,
    Saved,
    Timed,
}

impl ModeKind {
    pub const ALL: [ModeKind; 6] = [
        ModeKind::TenQuestions,
        ModeKind::Random,
        ModeKind::Missed,
        ModeKind::DailyQuestion,
        ModeKind::Saved,
        ModeKind::Timed,
    ];
}

/// What the user tapped on the study screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionEvent {
    /// Informational header, not actionable.
    Brief,
    /// Section title, not actionable.
    Title,
    UnlockAllQuestions,
    /// Sample test. `free_sample_only` is carried for display; it never
    /// affects gating.
    TakeTest { free_sample_only: bool },
    Mode(ModeKind),
}

/// Ambient subscription state, read by the caller at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub has_active_subscription: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(has_active_subscription: bool) -> Self {
        Self {
            has_active_subscription,
        }
    }

    #[must_use]
    pub fn subscribed() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn unsubscribed() -> Self {
        Self::new(false)
    }

    /// Whether subscription-gated content has to be previewed only.
    #[must_use]
    pub fn gated(&self) -> bool {
        !self.has_active_subscription
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_is_inverse_of_subscription() {
        assert!(SessionState::unsubscribed().gated());
        assert!(!SessionState::subscribed().gated());
        assert_eq!(SessionState::default(), SessionState::unsubscribed());
    }

    #[test]
    fn events_serialize_snake_case() {
        let json = serde_json::to_string(&SelectionEvent::Mode(ModeKind::DailyQuestion)).unwrap();
        assert_eq!(json, r#"{"mode":"daily_question"}"#);

        let json = serde_json::to_string(&SelectionEvent::UnlockAllQuestions).unwrap();
        assert_eq!(json, r#""unlock_all_questions""#);
    }
}
