pub mod date;
mod event;
mod ledger;
mod notification;
mod reminder;
mod settings;
mod shared;
pub mod templates;

pub use event::{
    is_within_reminder_window, EventKind, ScheduledEvent, EVENT_WINDOW_END_MILLIS,
    EVENT_WINDOW_START_MILLIS,
};
pub use ledger::{
    is_ledger_expired, ledger_key, parse_ledger_key, DailyDispatchLedger, LEDGER_KEY_PREFIX,
};
pub use notification::{
    DispatchReport, Notification, NotificationConfig, NotificationKind, ProcessUpdateKind,
    Recipient,
};
pub use reminder::{
    Reminder, ReminderChannel, ReminderState, RetryPolicy, MAX_RETRY_BACKOFF_MILLIS,
    REMINDER_LEAD_MILLIS, UPCOMING_WINDOW_MILLIS,
};
pub use settings::{NotificationHour, SenderIdentity, WhatsAppConfig, DEFAULT_NOTIFICATION_HOUR};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use templates::NotificationTemplate;
