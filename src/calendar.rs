//! Calendar event service: CRUD mapping over the document store.
//!
//! Events are stored with epoch-millisecond timestamps and listed ordered by
//! `start` ascending - an ordering the query provides, not one maintained in
//! memory.

use crate::error::{BoardError, Result};
use crate::store::{DocumentStore, Query};
use crate::types::{CalendarEvent, EventId, EventInput, EventPatch, EventStatus};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

pub(crate) const EVENTS: &str = "calendar_events";

/// Maps calendar events to their document forms
#[derive(Clone)]
pub struct CalendarService {
    store: Arc<dyn DocumentStore>,
}

impl CalendarService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Fetch all events ordered by start time ascending
    pub async fn get_events(&self) -> Result<Vec<CalendarEvent>> {
        let docs = self.store.list(EVENTS, Query::all().order_by("start")).await?;
        let mut events = Vec::with_capacity(docs.len());
        for (id, doc) in docs {
            let mut event: CalendarEvent = serde_json::from_value(doc)?;
            event.id = EventId::from_string(id);
            events.push(event);
        }
        Ok(events)
    }

    /// Create an event. Status starts as `scheduled`; both audit timestamps
    /// are stamped at write time.
    pub async fn add_event(&self, input: &EventInput) -> Result<EventId> {
        let now = Utc::now().timestamp_millis();
        let mut doc = serde_json::to_value(input)?;
        let fields = doc.as_object_mut().expect("event input is an object");
        fields.insert("status".into(), serde_json::to_value(EventStatus::Scheduled)?);
        fields.insert("createdAt".into(), json!(now));
        fields.insert("updatedAt".into(), json!(now));

        let id = self.store.insert(EVENTS, doc).await?;
        Ok(EventId::from_string(id))
    }

    /// Merge the patch's fields into an event, stamping `updatedAt`
    pub async fn update_event(&self, id: &EventId, patch: &EventPatch) -> Result<()> {
        let mut doc = serde_json::to_value(patch)?;
        let fields = doc.as_object_mut().expect("event patch is an object");
        fields.insert("updatedAt".into(), json!(Utc::now().timestamp_millis()));
        self.store
            .update(EVENTS, id.as_str(), doc)
            .await
            .map_err(|e| not_found_as_event(e, id))
    }

    /// Delete an event by id
    pub async fn delete_event(&self, id: &EventId) -> Result<()> {
        self.store
            .delete(EVENTS, id.as_str())
            .await
            .map_err(|e| not_found_as_event(e, id))
    }
}

fn not_found_as_event(err: BoardError, id: &EventId) -> BoardError {
    match err {
        BoardError::DocumentNotFound { .. } => BoardError::EventNotFound { id: id.to_string() },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::store::MemoryStore;
    use crate::types::Priority;
    use chrono::TimeZone;

    fn service() -> CalendarService {
        CalendarService::new(Arc::new(MemoryStore::new()))
    }

    fn input(title: &str, start_ms: i64) -> EventInput {
        EventInput {
            title: title.into(),
            description: None,
            start: Utc.timestamp_millis_opt(start_ms).unwrap(),
            end: Utc.timestamp_millis_opt(start_ms + 3_600_000).unwrap(),
            all_day: false,
            priority: Priority::Medium,
        }
    }

    #[tokio::test]
    async fn test_add_and_list_ordered_by_start() {
        let svc = service();
        svc.add_event(&input("Later", 2_000_000)).await.unwrap();
        svc.add_event(&input("Sooner", 1_000_000)).await.unwrap();

        let events = svc.get_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Sooner");
        assert_eq!(events[1].title, "Later");
        assert_eq!(events[0].status, EventStatus::Scheduled);
        assert_eq!(events[0].start.timestamp_millis(), 1_000_000);
    }

    #[tokio::test]
    async fn test_update_stamps_updated_at() {
        let svc = service();
        let id = svc.add_event(&input("Standup", 1_000_000)).await.unwrap();
        let created = svc.get_events().await.unwrap()[0].clone();

        svc.update_event(
            &id,
            &EventPatch {
                status: Some(EventStatus::Completed),
                ..EventPatch::default()
            },
        )
        .await
        .unwrap();

        let updated = svc.get_events().await.unwrap()[0].clone();
        assert_eq!(updated.status, EventStatus::Completed);
        assert_eq!(updated.title, "Standup");
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete_event() {
        let svc = service();
        let id = svc.add_event(&input("Standup", 1_000_000)).await.unwrap();
        svc.delete_event(&id).await.unwrap();
        assert!(svc.get_events().await.unwrap().is_empty());

        let err = svc.delete_event(&id).await.unwrap_err();
        assert!(matches!(err, BoardError::EventNotFound { .. }));
    }
}
