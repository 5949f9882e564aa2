use crate::{APIResponse, BaseClient, ReminderChannel, ID};
use lembrete_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub event_id: ID,
    pub event_title: String,
    pub event_date: i64,
    pub channel: Option<ReminderChannel>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Responds with no reminder when the event is less than 24 hours away
    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_auto_reminder::APIResponse> {
        let body = create_auto_reminder::RequestBody {
            event_id: input.event_id,
            event_title: input.event_title,
            event_date: input.event_date,
            channel: input.channel,
        };
        self.base
            .post(
                body,
                "reminders".into(),
                &[StatusCode::CREATED, StatusCode::OK],
            )
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn get_pending(&self) -> APIResponse<get_pending_reminders::APIResponse> {
        self.base
            .get("reminders/pending".into(), StatusCode::OK)
            .await
    }

    pub async fn get_upcoming(&self) -> APIResponse<get_upcoming_reminders::APIResponse> {
        self.base
            .get("reminders/upcoming".into(), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete_by_event(
        &self,
        event_id: ID,
    ) -> APIResponse<delete_event_reminders::APIResponse> {
        self.base
            .delete(format!("events/{}/reminders", event_id), StatusCode::OK)
            .await
    }

    pub async fn send_now(&self, reminder_id: ID) -> APIResponse<send_reminder_now::APIResponse> {
        self.base
            .post(
                (),
                format!("reminders/{}/send", reminder_id),
                &[StatusCode::OK],
            )
            .await
    }
}
