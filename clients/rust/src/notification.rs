use crate::{APIResponse, BaseClient, NotificationKind, ProcessUpdateKind, Recipient};
use lembrete_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

pub struct SendNotificationInput {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub recipient: Recipient,
}

pub struct NotifyProcessUpdateInput {
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub process_number: String,
    pub update_type: ProcessUpdateKind,
    pub details: String,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn send(
        &self,
        input: SendNotificationInput,
    ) -> APIResponse<send_notification::APIResponse> {
        let body = send_notification::RequestBody {
            kind: input.kind,
            title: input.title,
            message: input.message,
            recipient: input.recipient,
        };
        self.base
            .post(body, "notifications".into(), &[StatusCode::OK])
            .await
    }

    pub async fn notify_process_update(
        &self,
        input: NotifyProcessUpdateInput,
    ) -> APIResponse<notify_process_update::APIResponse> {
        let body = notify_process_update::RequestBody {
            client_name: input.client_name,
            client_email: input.client_email,
            client_phone: input.client_phone,
            process_number: input.process_number,
            update_type: input.update_type,
            details: input.details,
        };
        self.base
            .post(
                body,
                "notifications/process-update".into(),
                &[StatusCode::OK],
            )
            .await
    }
}
