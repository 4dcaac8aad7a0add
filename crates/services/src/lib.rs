#![forbid(unsafe_code)]

pub mod analytics;
pub mod api;
pub mod collaborators;
pub mod error;
pub mod study_flow;

pub use study_core::Clock;

pub use analytics::{AnalyticsEvent, AnalyticsSink, RecordingAnalytics, TracingAnalytics};
pub use api::{ApiClient, ApiConfig, LoginRequest};
pub use collaborators::{
    FixedMinutes, MinutesPicker, NavigationHost, StaticSubscription, SubscriptionProvider,
};
pub use error::{ApiError, NavigationError, StudyFlowError};
pub use study_flow::{StudyFlow, StudyOutcome, preloader_visible};
