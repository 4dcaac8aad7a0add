use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use study_core::model::StudyTag;

/// Event logged for every actionable tap on the study screen.
pub const STUDY_TAP_EVENT: &str = "Study Tap";
/// Event logged once the study screen knows which exam it shows.
pub const STUDY_SCREEN_EVENT: &str = "Study Screen";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: BTreeMap<String, String>,
    pub recorded_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn new(name: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
            recorded_at,
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// `"Study Tap"` with `{"what": <tag>}`.
    #[must_use]
    pub fn study_tap(tag: StudyTag, recorded_at: DateTime<Utc>) -> Self {
        Self::new(STUDY_TAP_EVENT, recorded_at).with_property("what", tag.as_str())
    }

    /// `"Study Screen"` with `{"exam": <course name>}`.
    #[must_use]
    pub fn study_screen(course_name: &str, recorded_at: DateTime<Utc>) -> Self {
        Self::new(STUDY_SCREEN_EVENT, recorded_at).with_property("exam", course_name)
    }

    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Fire-and-forget analytics destination.
pub trait AnalyticsSink: Send + Sync {
    fn log_event(&self, event: AnalyticsEvent);
}

/// Writes events to the `analytics` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn log_event(&self, event: AnalyticsEvent) {
        let properties = serde_json::to_string(&event.properties).unwrap_or_default();
        tracing::info!(
            target: "analytics",
            event_name = %event.name,
            %properties,
            at = %event.recorded_at,
            "analytics event"
        );
    }
}

/// Keeps events in memory, for tests and prototyping.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingAnalytics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn log_event(&self, event: AnalyticsEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use study_core::time::fixed_now;

    #[test]
    fn study_tap_uses_what_property() {
        let event = AnalyticsEvent::study_tap(StudyTag::QuestionOfDay, fixed_now());
        assert_eq!(event.name, "Study Tap");
        assert_eq!(event.property("what"), Some("question of the day"));
        assert_eq!(event.properties.len(), 1);
    }

    #[test]
    fn study_screen_uses_exam_property() {
        let event = AnalyticsEvent::study_screen("LSAT", fixed_now());
        assert_eq!(event.name, "Study Screen");
        assert_eq!(event.property("exam"), Some("LSAT"));
    }

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingAnalytics::new();
        sink.log_event(AnalyticsEvent::study_tap(StudyTag::Settings, fixed_now()));
        sink.log_event(AnalyticsEvent::study_tap(StudyTag::RandomSet, fixed_now()));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].property("what"), Some("settings"));
        assert_eq!(events[1].property("what"), Some("random set"));
    }
}
