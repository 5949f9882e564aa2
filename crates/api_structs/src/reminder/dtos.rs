use lembrete_domain::{Reminder, ReminderChannel, ReminderState, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub event_id: ID,
    pub event_title: String,
    pub event_date: i64,
    pub reminder_date: i64,
    #[serde(rename = "type")]
    pub channel: ReminderChannel,
    pub sent: bool,
    pub state: ReminderState,
    pub attempts: u32,
    pub retry_at: Option<i64>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            sent: reminder.is_sent(),
            id: reminder.id,
            event_id: reminder.event_id,
            event_title: reminder.event_title,
            event_date: reminder.event_date,
            reminder_date: reminder.reminder_date,
            channel: reminder.channel,
            state: reminder.state,
            attempts: reminder.attempts,
            retry_at: reminder.retry_at,
        }
    }
}
