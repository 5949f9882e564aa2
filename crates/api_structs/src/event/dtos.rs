use lembrete_domain::{EventKind, ReminderChannel, ScheduledEvent, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEventDTO {
    pub id: ID,
    pub title: String,
    pub date: i64,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub process_number: Option<String>,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(rename = "reminderType")]
    pub reminder_channel: ReminderChannel,
    pub created: i64,
}

impl ScheduledEventDTO {
    pub fn new(event: ScheduledEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.date,
            client_name: event.client_name,
            client_email: event.client_email,
            client_phone: event.client_phone,
            process_number: event.process_number,
            kind: event.kind,
            reminder_channel: event.reminder_channel,
            created: event.created,
        }
    }
}
