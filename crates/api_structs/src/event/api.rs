use crate::dtos::ScheduledEventDTO;
use lembrete_domain::{EventKind, ReminderChannel, ScheduledEvent, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct ScheduledEventResponse {
    pub event: ScheduledEventDTO,
}

impl ScheduledEventResponse {
    pub fn new(event: ScheduledEvent) -> Self {
        Self {
            event: ScheduledEventDTO::new(event),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub date: i64,
        pub client_name: String,
        #[serde(default)]
        pub client_email: Option<String>,
        #[serde(default)]
        pub client_phone: Option<String>,
        #[serde(default)]
        pub process_number: Option<String>,
        #[serde(rename = "type", default)]
        pub kind: Option<EventKind>,
        #[serde(rename = "reminderType", default)]
        pub reminder_channel: Option<ReminderChannel>,
    }

    pub type APIResponse = ScheduledEventResponse;
}

pub mod get_events {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub events: Vec<ScheduledEventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<ScheduledEvent>) -> Self {
            Self {
                events: events.into_iter().map(ScheduledEventDTO::new).collect(),
            }
        }
    }
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = ScheduledEventResponse;
}
