mod ids;
mod navigation;
mod selection;
mod test_spec;

pub use ids::{ParseIdError, TestId, UserTestId};
pub use navigation::{NavigationIntent, StudyTag};
pub use selection::{ModeKind, SelectionEvent, SessionState};
pub use test_spec::{MinutesError, TestKind, TestSpec, TimedMinutes};
