use super::IReminderRepo;
use crate::repos::kv::IKVRepo;
use crate::repos::shared::collection::KVCollection;
use crate::repos::shared::document::{js_date, lenient_id, StoredDocument};
use crate::repos::shared::repo::DeleteResult;
use lembrete_domain::{Reminder, ReminderChannel, ReminderState, ID};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const REMINDERS_KEY: &str = "reminders";

pub struct KVReminderRepo {
    collection: KVCollection<Reminder, ReminderRaw>,
}

impl KVReminderRepo {
    pub fn new(kv: Arc<dyn IKVRepo>) -> Self {
        Self {
            collection: KVCollection::new(kv, REMINDERS_KEY),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for KVReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        self.collection
            .update(|reminders| reminders.push(reminder.clone()))
            .await
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        self.collection
            .update(|reminders| {
                if let Some(stored) = reminders.iter_mut().find(|r| r.id == reminder.id) {
                    *stored = reminder.clone();
                }
            })
            .await
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let mut found = self.collection.find_by(|r| &r.id == reminder_id).await?;
        Ok(found.pop())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        self.collection.find_all().await
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        self.collection
            .update(|reminders| {
                reminders
                    .iter()
                    .position(|r| &r.id == reminder_id)
                    .map(|index| reminders.remove(index))
            })
            .await
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        self.collection
            .update(|reminders| {
                let before = reminders.len();
                reminders.retain(|r| &r.event_id != event_id);
                DeleteResult {
                    deleted_count: (before - reminders.len()) as i64,
                }
            })
            .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReminderRaw {
    id: ID,
    #[serde(deserialize_with = "lenient_id::deserialize")]
    event_id: ID,
    event_title: String,
    #[serde(with = "js_date")]
    event_date: i64,
    #[serde(with = "js_date")]
    reminder_date: i64,
    #[serde(rename = "type", default)]
    channel: ReminderChannel,
    sent: bool,
    /// Missing on records written before dispatch states were tracked
    #[serde(default)]
    state: Option<ReminderState>,
    #[serde(default)]
    attempts: u32,
    #[serde(default, with = "js_date::option")]
    retry_at: Option<i64>,
}

impl StoredDocument<Reminder> for ReminderRaw {
    fn to_domain(self) -> Reminder {
        let state = match self.state {
            Some(state) => state,
            None if self.sent => ReminderState::Sent,
            None => ReminderState::Scheduled,
        };
        Reminder {
            id: self.id,
            event_id: self.event_id,
            event_title: self.event_title,
            event_date: self.event_date,
            reminder_date: self.reminder_date,
            channel: self.channel,
            state,
            attempts: self.attempts,
            retry_at: self.retry_at,
        }
    }

    fn from_domain(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            event_id: reminder.event_id.clone(),
            event_title: reminder.event_title.clone(),
            event_date: reminder.event_date,
            reminder_date: reminder.reminder_date,
            channel: reminder.channel,
            sent: reminder.is_sent(),
            state: Some(reminder.state),
            attempts: reminder.attempts,
            retry_at: reminder.retry_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_without_dispatch_state() {
        let raw = r#"[
            {"id":"reminder-1734267600000","eventId":"7","eventTitle":"Audiência X","eventDate":"2024-12-16T19:00:00.000Z","reminderDate":"2024-12-15T19:00:00.000Z","type":"email","sent":true},
            {"id":"reminder-1734267600001","eventId":8,"eventTitle":"Prazo Y","eventDate":"2024-12-17T19:00:00.000Z","reminderDate":"2024-12-16T19:00:00.000Z","type":"whatsapp","sent":false}
        ]"#;
        let docs: Vec<ReminderRaw> = serde_json::from_str(raw).unwrap();
        let reminders: Vec<Reminder> = docs.into_iter().map(|doc| doc.to_domain()).collect();

        assert_eq!(reminders[0].state, ReminderState::Sent);
        assert_eq!(reminders[0].channel, ReminderChannel::Email);
        assert_eq!(reminders[0].reminder_date, 1734289200000);
        assert_eq!(reminders[1].event_id, ID::from("8"));
        assert_eq!(reminders[1].state, ReminderState::Scheduled);
        assert_eq!(reminders[1].attempts, 0);
        assert_eq!(reminders[1].retry_at, None);
    }

    #[test]
    fn writes_sent_flag_and_state() {
        let mut reminder = Reminder::new_auto(
            ID::from("7"),
            "Audiência X".into(),
            1734375600000,
            ReminderChannel::Both,
            1734267600000,
        )
        .unwrap();
        reminder.begin_dispatch();
        reminder.mark_sent();

        let json = serde_json::to_value(ReminderRaw::from_domain(&reminder)).unwrap();
        assert_eq!(json["sent"], true);
        assert_eq!(json["state"], "sent");
        assert_eq!(json["type"], "both");
        assert_eq!(json["eventDate"], "2024-12-16T19:00:00.000Z");
        assert_eq!(json["retryAt"], serde_json::Value::Null);
    }
}
