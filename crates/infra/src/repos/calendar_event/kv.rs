use super::IEventRepo;
use crate::repos::kv::IKVRepo;
use crate::repos::shared::collection::KVCollection;
use crate::repos::shared::document::{js_date, lenient_id, StoredDocument};
use lembrete_domain::{EventKind, ReminderChannel, ScheduledEvent, ID};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const EVENTS_KEY: &str = "calendar_events";

pub struct KVEventRepo {
    collection: KVCollection<ScheduledEvent, ScheduledEventRaw>,
}

impl KVEventRepo {
    pub fn new(kv: Arc<dyn IKVRepo>) -> Self {
        Self {
            collection: KVCollection::new(kv, EVENTS_KEY),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for KVEventRepo {
    async fn insert(&self, event: &ScheduledEvent) -> anyhow::Result<()> {
        self.collection
            .update(|events| events.push(event.clone()))
            .await
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<ScheduledEvent>> {
        let mut found = self.collection.find_by(|e| &e.id == event_id).await?;
        Ok(found.pop())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ScheduledEvent>> {
        self.collection.find_all().await
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<ScheduledEvent>> {
        self.collection
            .update(|events| {
                events
                    .iter()
                    .position(|e| &e.id == event_id)
                    .map(|index| events.remove(index))
            })
            .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduledEventRaw {
    #[serde(deserialize_with = "lenient_id::deserialize")]
    id: ID,
    title: String,
    #[serde(with = "js_date")]
    date: i64,
    client_name: String,
    #[serde(default)]
    client_email: Option<String>,
    #[serde(default)]
    client_phone: Option<String>,
    #[serde(default)]
    process_number: Option<String>,
    #[serde(rename = "type", default)]
    kind: EventKind,
    #[serde(rename = "reminderType", default)]
    reminder_channel: ReminderChannel,
    #[serde(with = "js_date")]
    created: i64,
}

impl StoredDocument<ScheduledEvent> for ScheduledEventRaw {
    fn to_domain(self) -> ScheduledEvent {
        ScheduledEvent {
            id: self.id,
            title: self.title,
            date: self.date,
            client_name: self.client_name,
            client_email: self.client_email,
            client_phone: self.client_phone,
            process_number: self.process_number,
            kind: self.kind,
            reminder_channel: self.reminder_channel,
            created: self.created,
        }
    }

    fn from_domain(event: &ScheduledEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date: event.date,
            client_name: event.client_name.clone(),
            client_email: event.client_email.clone(),
            client_phone: event.client_phone.clone(),
            process_number: event.process_number.clone(),
            kind: event.kind,
            reminder_channel: event.reminder_channel,
            created: event.created,
        }
    }
}
