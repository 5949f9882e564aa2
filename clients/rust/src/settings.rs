use crate::{APIResponse, BaseClient, NotificationConfig, WhatsAppConfig};
use lembrete_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SettingsClient {
    base: Arc<BaseClient>,
}

pub struct SenderIdentityInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SettingsClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_notification_time(&self) -> APIResponse<get_notification_time::APIResponse> {
        self.base
            .get("settings/notification-time".into(), StatusCode::OK)
            .await
    }

    /// Fails with a `400` status for hours outside 0-23
    pub async fn set_notification_time(
        &self,
        hour: i64,
    ) -> APIResponse<set_notification_time::APIResponse> {
        let body = set_notification_time::RequestBody { hour };
        self.base
            .put(body, "settings/notification-time".into(), StatusCode::OK)
            .await
    }

    pub async fn get_notification_config(
        &self,
    ) -> APIResponse<get_notification_config::APIResponse> {
        self.base
            .get("settings/notifications".into(), StatusCode::OK)
            .await
    }

    pub async fn save_notification_config(
        &self,
        config: NotificationConfig,
    ) -> APIResponse<save_notification_config::APIResponse> {
        self.base
            .put(config, "settings/notifications".into(), StatusCode::OK)
            .await
    }

    pub async fn get_whatsapp_config(&self) -> APIResponse<get_whatsapp_config::APIResponse> {
        self.base
            .get("settings/whatsapp".into(), StatusCode::OK)
            .await
    }

    pub async fn save_whatsapp_config(
        &self,
        config: WhatsAppConfig,
    ) -> APIResponse<save_whatsapp_config::APIResponse> {
        self.base
            .put(config, "settings/whatsapp".into(), StatusCode::OK)
            .await
    }

    pub async fn get_sender_identity(&self) -> APIResponse<get_sender_identity::APIResponse> {
        self.base
            .get("settings/sender".into(), StatusCode::OK)
            .await
    }

    pub async fn save_sender_identity(
        &self,
        input: SenderIdentityInput,
    ) -> APIResponse<save_sender_identity::APIResponse> {
        let body = save_sender_identity::RequestBody {
            name: input.name,
            email: input.email,
            phone: input.phone,
        };
        self.base
            .put(body, "settings/sender".into(), StatusCode::OK)
            .await
    }
}
