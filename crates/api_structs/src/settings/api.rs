use lembrete_domain::{NotificationConfig, SenderIdentity, WhatsAppConfig};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct NotificationTimeResponse {
    pub hour: u8,
}

pub mod get_notification_time {
    use super::*;

    pub type APIResponse = NotificationTimeResponse;
}

pub mod set_notification_time {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct RequestBody {
        /// 0-23
        pub hour: i64,
    }

    pub type APIResponse = NotificationTimeResponse;
}

pub mod get_notification_config {
    use super::*;

    pub type APIResponse = NotificationConfig;
}

pub mod save_notification_config {
    use super::*;

    pub type RequestBody = NotificationConfig;
    pub type APIResponse = NotificationConfig;
}

pub mod get_whatsapp_config {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub config: Option<WhatsAppConfig>,
    }
}

pub mod save_whatsapp_config {
    use super::*;

    pub type RequestBody = WhatsAppConfig;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub config: WhatsAppConfig,
    }
}

pub mod get_sender_identity {
    use super::*;

    pub type APIResponse = SenderIdentity;
}

pub mod save_sender_identity {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
    }

    pub type APIResponse = SenderIdentity;
}
