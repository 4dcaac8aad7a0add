use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TestId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MinutesError {
    #[error("timed test needs at least one minute")]
    Zero,
}

//
// ─── TIMED MINUTES ────────────────────────────────────────────────────────────
//

/// Length of a timed test. Always at least one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TimedMinutes(NonZeroU32);

impl TimedMinutes {
    /// # Errors
    ///
    /// Returns `MinutesError::Zero` for a zero minute count.
    pub fn new(minutes: u32) -> Result<Self, MinutesError> {
        NonZeroU32::new(minutes).map(Self).ok_or(MinutesError::Zero)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for TimedMinutes {
    type Error = MinutesError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TimedMinutes> for u32 {
    fn from(value: TimedMinutes) -> Self {
        value.get()
    }
}

impl FromStr for TimedMinutes {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes = s.trim().parse::<u32>()?;
        Ok(Self::new(minutes)?)
    }
}

impl fmt::Display for TimedMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

//
// ─── TEST SPEC ────────────────────────────────────────────────────────────────
//

/// Which question set a test-taking flow should load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    /// A specific prepared test, or the next available one when `None`.
    Get(Option<TestId>),
    TenSet,
    RandomSet,
    FailedSet,
    QuestionOfDay,
    Saved,
    Timed(TimedMinutes),
}

/// Parameters needed to start a test-taking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestSpec {
    pub kind: TestKind,
    /// Access beyond a preview requires an active subscription.
    pub gated: bool,
}

impl TestSpec {
    #[must_use]
    pub fn new(kind: TestKind, gated: bool) -> Self {
        Self { kind, gated }
    }

    /// The sample test, open to everyone.
    #[must_use]
    pub fn free_sample() -> Self {
        Self::new(TestKind::Get(None), false)
    }
}
