use crate::dtos::ReminderDTO;
use lembrete_domain::{Reminder, ReminderChannel, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

#[derive(Deserialize, Serialize)]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
        }
    }
}

pub mod create_auto_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub event_id: ID,
        pub event_title: String,
        pub event_date: i64,
        #[serde(rename = "type", default)]
        pub channel: Option<ReminderChannel>,
    }

    /// `reminder` is `None` when the event is less than 24 hours away
    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub reminder: Option<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminder: Option<Reminder>) -> Self {
            Self {
                reminder: reminder.map(ReminderDTO::new),
            }
        }
    }
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod get_pending_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod get_upcoming_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub deleted: bool,
    }
}

pub mod delete_event_reminders {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub deleted_count: i64,
    }
}

pub mod send_reminder_now {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub reminder: ReminderDTO,
        /// Whether at least one channel delivered the reminder
        pub delivered: bool,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder, delivered: bool) -> Self {
            Self {
                reminder: ReminderDTO::new(reminder),
                delivered,
            }
        }
    }
}
