mod base;
mod event;
mod notification;
mod reminder;
mod settings;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use event::ScheduledEventClient;
pub use event::CreateEventInput;
pub use lembrete_api_structs::dtos::*;
pub use lembrete_domain::templates;
pub use lembrete_domain::{
    DispatchReport, EventKind, NotificationConfig, NotificationKind, ProcessUpdateKind, Recipient,
    ReminderChannel, ReminderState, SenderIdentity, WhatsAppConfig, ID,
};
use notification::NotificationClient;
pub use notification::{NotifyProcessUpdateInput, SendNotificationInput};
use reminder::ReminderClient;
pub use reminder::CreateReminderInput;
use settings::SettingsClient;
pub use settings::SenderIdentityInput;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use lembrete_api_structs::dtos::ReminderDTO as Reminder;
pub use lembrete_api_structs::dtos::ScheduledEventDTO as ScheduledEvent;

/// Lembrete Server SDK
///
/// The SDK contains methods for interacting with the Lembrete server
/// API.
#[derive(Clone)]
pub struct LembreteSDK {
    pub event: ScheduledEventClient,
    pub notification: NotificationClient,
    pub reminder: ReminderClient,
    pub settings: SettingsClient,
    pub status: StatusClient,
}

impl LembreteSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let event = ScheduledEventClient::new(base.clone());
        let notification = NotificationClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let settings = SettingsClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            event,
            notification,
            reminder,
            settings,
            status,
        }
    }
}
