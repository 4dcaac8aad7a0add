//! Maps study-screen selections to navigation intents.
//!
//! Everything here is pure: the same selection and session state always
//! produce the same intent and tag. Emitting analytics and performing the
//! transition are left to the caller.

use serde::{Deserialize, Serialize};

use crate::model::{
    ModeKind, NavigationIntent, SelectionEvent, SessionState, StudyTag, TestKind, TestSpec,
    TimedMinutes,
};

/// Result of a dispatch: exactly one intent and at most one analytics tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    pub intent: NavigationIntent,
    pub tag: Option<StudyTag>,
}

impl Dispatch {
    #[must_use]
    pub fn new(intent: NavigationIntent, tag: Option<StudyTag>) -> Self {
        Self { intent, tag }
    }

    #[must_use]
    pub fn untagged(intent: NavigationIntent) -> Self {
        Self::new(intent, None)
    }

    #[must_use]
    pub fn tagged(intent: NavigationIntent, tag: StudyTag) -> Self {
        Self::new(intent, Some(tag))
    }

    /// Split into the `(intent, tag)` pair handed to analytics callers.
    #[must_use]
    pub fn into_parts(self) -> (NavigationIntent, Option<String>) {
        (self.intent, self.tag.map(|tag| tag.as_str().to_owned()))
    }
}

/// Decide what a tap on the study screen should do.
#[must_use]
pub fn dispatch(event: SelectionEvent, session: SessionState) -> Dispatch {
    match event {
        SelectionEvent::Brief | SelectionEvent::Title => {
            Dispatch::untagged(NavigationIntent::NoOp)
        }
        SelectionEvent::UnlockAllQuestions => {
            Dispatch::tagged(NavigationIntent::OpenPaygate, StudyTag::UnlockAllQuestions)
        }
        // The sample test stays ungated whatever the subscription says.
        SelectionEvent::TakeTest { .. } => Dispatch::tagged(
            NavigationIntent::StartTest(TestSpec::free_sample()),
            StudyTag::TakeFreeTest,
        ),
        SelectionEvent::Mode(mode) => dispatch_mode(mode, session),
    }
}

fn dispatch_mode(mode: ModeKind, session: SessionState) -> Dispatch {
    let (kind, tag) = match mode {
        ModeKind::TenQuestions => (TestKind::TenSet, StudyTag::TenQuestions),
        ModeKind::Random => (TestKind::RandomSet, StudyTag::RandomSet),
        ModeKind::Missed => (TestKind::FailedSet, StudyTag::MissedQuestions),
        ModeKind::DailyQuestion => (TestKind::QuestionOfDay, StudyTag::QuestionOfDay),
        ModeKind::Saved => (TestKind::Saved, StudyTag::SavedQuestions),
        ModeKind::Timed => {
            return Dispatch::tagged(NavigationIntent::OpenTimedPicker, StudyTag::TimedQuestions);
        }
    };

    Dispatch::tagged(
        NavigationIntent::StartTest(TestSpec::new(kind, session.gated())),
        tag,
    )
}

/// Second step of the timed flow, once the picker returned a minute count.
///
/// No tag: the tap was already attributed when the picker opened.
#[must_use]
pub fn resolve_timed(minutes: TimedMinutes, session: SessionState) -> NavigationIntent {
    NavigationIntent::StartTest(TestSpec::new(TestKind::Timed(minutes), session.gated()))
}

/// The settings button in the navigation bar.
#[must_use]
pub fn settings_tapped() -> Dispatch {
    Dispatch::tagged(NavigationIntent::OpenSettings, StudyTag::Settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSIONS: [SessionState; 2] = [
        SessionState {
            has_active_subscription: false,
        },
        SessionState {
            has_active_subscription: true,
        },
    ];

    fn start_test(dispatch: &Dispatch) -> TestSpec {
        match dispatch.intent {
            NavigationIntent::StartTest(spec) => spec,
            other => panic!("expected StartTest, got {other:?}"),
        }
    }

    #[test]
    fn informational_rows_do_nothing() {
        for session in SESSIONS {
            for event in [SelectionEvent::Brief, SelectionEvent::Title] {
                assert_eq!(
                    dispatch(event, session).into_parts(),
                    (NavigationIntent::NoOp, None)
                );
            }
        }
    }

    #[test]
    fn take_test_is_never_gated() {
        for session in SESSIONS {
            for free_sample_only in [false, true] {
                let out = dispatch(SelectionEvent::TakeTest { free_sample_only }, session);
                assert_eq!(
                    out.intent,
                    NavigationIntent::StartTest(TestSpec::new(TestKind::Get(None), false))
                );
                assert_eq!(out.tag, Some(StudyTag::TakeFreeTest));
            }
        }
    }

    #[test]
    fn modes_are_gated_without_subscription() {
        for session in SESSIONS {
            for mode in ModeKind::ALL {
                if mode == ModeKind::Timed {
                    continue;
                }
                let spec = start_test(&dispatch(SelectionEvent::Mode(mode), session));
                assert_eq!(spec.gated, !session.has_active_subscription, "{mode:?}");
            }
        }
    }

    #[test]
    fn timed_mode_opens_picker_first() {
        for session in SESSIONS {
            let out = dispatch(SelectionEvent::Mode(ModeKind::Timed), session);
            assert_eq!(out.intent, NavigationIntent::OpenTimedPicker);
            assert_eq!(out.tag, Some(StudyTag::TimedQuestions));
        }
    }

    #[test]
    fn modes_map_to_kinds_and_tags() {
        let session = SessionState::subscribed();
        let cases = [
            (ModeKind::TenQuestions, TestKind::TenSet, "10 questions"),
            (ModeKind::Random, TestKind::RandomSet, "random set"),
            (ModeKind::Missed, TestKind::FailedSet, "missed questions"),
            (
                ModeKind::DailyQuestion,
                TestKind::QuestionOfDay,
                "question of the day",
            ),
            (ModeKind::Saved, TestKind::Saved, "saved questions"),
        ];
        for (mode, kind, tag) in cases {
            let (intent, got_tag) = dispatch(SelectionEvent::Mode(mode), session).into_parts();
            assert_eq!(intent, NavigationIntent::StartTest(TestSpec::new(kind, false)));
            assert_eq!(got_tag.as_deref(), Some(tag));
        }
    }

    #[test]
    fn unlock_opens_paygate() {
        let out = dispatch(
            SelectionEvent::UnlockAllQuestions,
            SessionState::unsubscribed(),
        );
        assert_eq!(
            out.into_parts(),
            (
                NavigationIntent::OpenPaygate,
                Some("unlock all questions".to_string())
            )
        );
    }

    #[test]
    fn saved_with_subscription_is_ungated() {
        let out = dispatch(
            SelectionEvent::Mode(ModeKind::Saved),
            SessionState::subscribed(),
        );
        assert_eq!(
            out.into_parts(),
            (
                NavigationIntent::StartTest(TestSpec::new(TestKind::Saved, false)),
                Some("saved questions".to_string())
            )
        );
    }

    #[test]
    fn missed_without_subscription_is_gated() {
        let out = dispatch(
            SelectionEvent::Mode(ModeKind::Missed),
            SessionState::unsubscribed(),
        );
        assert_eq!(
            out.into_parts(),
            (
                NavigationIntent::StartTest(TestSpec::new(TestKind::FailedSet, true)),
                Some("missed questions".to_string())
            )
        );
    }

    #[test]
    fn timed_second_step_carries_minutes() {
        let minutes = TimedMinutes::new(30).unwrap();
        for session in SESSIONS {
            assert_eq!(
                resolve_timed(minutes, session),
                NavigationIntent::StartTest(TestSpec::new(
                    TestKind::Timed(minutes),
                    !session.has_active_subscription
                ))
            );
        }
    }

    #[test]
    fn dispatch_is_repeatable() {
        let events = [
            SelectionEvent::Brief,
            SelectionEvent::UnlockAllQuestions,
            SelectionEvent::TakeTest {
                free_sample_only: true,
            },
            SelectionEvent::Mode(ModeKind::Random),
            SelectionEvent::Mode(ModeKind::Timed),
        ];
        for session in SESSIONS {
            for event in events {
                assert_eq!(dispatch(event, session), dispatch(event, session));
            }
        }
    }

    #[test]
    fn settings_button_is_tagged() {
        assert_eq!(
            settings_tapped().into_parts(),
            (NavigationIntent::OpenSettings, Some("settings".to_string()))
        );
    }
}
