use crate::{APIResponse, BaseClient, EventKind, ReminderChannel, ID};
use lembrete_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ScheduledEventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub title: String,
    pub date: i64,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub process_number: Option<String>,
    pub kind: Option<EventKind>,
    pub reminder_channel: Option<ReminderChannel>,
}

impl ScheduledEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            title: input.title,
            date: input.date,
            client_name: input.client_name,
            client_email: input.client_email,
            client_phone: input.client_phone,
            process_number: input.process_number,
            kind: input.kind,
            reminder_channel: input.reminder_channel,
        };
        self.base
            .post(body, "events".into(), &[StatusCode::CREATED])
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_events::APIResponse> {
        self.base.get("events".into(), StatusCode::OK).await
    }

    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }
}
