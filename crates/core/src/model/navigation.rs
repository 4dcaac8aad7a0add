use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::test_spec::TestSpec;

/// Screen transition the host should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationIntent {
    OpenSettings,
    OpenPaygate,
    /// Ask for a minute count first; the test starts only once one is picked.
    OpenTimedPicker,
    StartTest(TestSpec),
    NoOp,
}

impl NavigationIntent {
    #[must_use]
    pub fn test_spec(&self) -> Option<&TestSpec> {
        match self {
            NavigationIntent::StartTest(spec) => Some(spec),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, NavigationIntent::NoOp)
    }
}

/// Analytics tag attached to a study-screen tap.
///
/// The string values are consumed by analytics dashboards and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyTag {
    #[serde(rename = "settings")]
    Settings,
    #[serde(rename = "unlock all questions")]
    UnlockAllQuestions,
    #[serde(rename = "take a free test")]
    TakeFreeTest,
    #[serde(rename = "10 questions")]
    TenQuestions,
    #[serde(rename = "random set")]
    RandomSet,
    #[serde(rename = "missed questions")]
    MissedQuestions,
    #[serde(rename = "question of the day")]
    QuestionOfDay,
    #[serde(rename = "saved questions")]
    SavedQuestions,
    #[serde(rename = "timed questions")]
    TimedQuestions,
}

impl StudyTag {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StudyTag::Settings => "settings",
            StudyTag::UnlockAllQuestions => "unlock all questions",
            StudyTag::TakeFreeTest => "take a free test",
            StudyTag::TenQuestions => "10 questions",
            StudyTag::RandomSet => "random set",
            StudyTag::MissedQuestions => "missed questions",
            StudyTag::QuestionOfDay => "question of the day",
            StudyTag::SavedQuestions => "saved questions",
            StudyTag::TimedQuestions => "timed questions",
        }
    }
}

impl fmt::Display for StudyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
