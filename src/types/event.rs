//! Calendar event types

use super::ids::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority of a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Lifecycle status of a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A calendar event.
///
/// Start/end and the audit timestamps cross the document boundary as epoch
/// milliseconds and are reconstructed to `DateTime<Utc>` on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(skip)]
    pub id: EventId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    pub priority: Priority,
    pub status: EventStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating an event; id, status and audit
/// timestamps are assigned by the service at write time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end: DateTime<Utc>,
    pub all_day: bool,
    pub priority: Priority,
}

/// Partial event update; present fields overwrite, `updatedAt` is stamped by
/// the service.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_document_form() {
        let event = CalendarEvent {
            id: EventId::from_string("e1"),
            title: "Standup".into(),
            description: None,
            start: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            end: Utc.timestamp_millis_opt(1_700_000_900_000).unwrap(),
            all_day: false,
            priority: Priority::Medium,
            status: EventStatus::Scheduled,
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            updated_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["start"], 1_700_000_000_000i64);
        assert_eq!(json["end"], 1_700_000_900_000i64);
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["status"], "scheduled");
        assert!(json.get("description").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_event_patch_converts_dates() {
        let patch = EventPatch {
            start: Some(Utc.timestamp_millis_opt(42_000).unwrap()),
            status: Some(EventStatus::Completed),
            ..EventPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "start": 42_000, "status": "completed" })
        );
    }
}
