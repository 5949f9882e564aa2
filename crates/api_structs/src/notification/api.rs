use lembrete_domain::{DispatchReport, NotificationKind, ProcessUpdateKind, Recipient};
use serde::{Deserialize, Serialize};

pub mod send_notification {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(rename = "type")]
        pub kind: NotificationKind,
        pub title: String,
        pub message: String,
        pub recipient: Recipient,
    }

    pub type APIResponse = DispatchReport;
}

pub mod notify_process_update {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub client_name: String,
        #[serde(default)]
        pub client_email: Option<String>,
        #[serde(default)]
        pub client_phone: Option<String>,
        pub process_number: String,
        pub update_type: ProcessUpdateKind,
        #[serde(default)]
        pub details: String,
    }

    pub type APIResponse = DispatchReport;
}
