use serde::{Deserialize, Serialize};

/// Hour of the day used when none has been configured
pub const DEFAULT_NOTIFICATION_HOUR: u8 = 9;

/// Preferred hour of the day (0-23) for sending notifications.
///
/// Displayed to the staff, not consulted by the scheduler's due checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationHour(u8);

impl NotificationHour {
    /// `None` for anything outside 0-23
    pub fn new(hour: i64) -> Option<Self> {
        if (0..=23).contains(&hour) {
            Some(Self(hour as u8))
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.0
    }
}

impl Default for NotificationHour {
    fn default() -> Self {
        Self(DEFAULT_NOTIFICATION_HOUR)
    }
}

/// Credentials for the WhatsApp sending endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppConfig {
    #[serde(default)]
    pub link_id: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub phone_number: String,
}

impl WhatsAppConfig {
    /// Enough to call the endpoint
    pub fn has_credentials(&self) -> bool {
        !self.link_id.trim().is_empty() && !self.token.trim().is_empty()
    }

    /// Required before the config can be saved
    pub fn is_complete(&self) -> bool {
        self.has_credentials() && !self.phone_number.trim().is_empty()
    }
}

/// The staff member who receives the firm's own reminders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderIdentity {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Default for SenderIdentity {
    fn default() -> Self {
        Self {
            name: "Usuário".into(),
            email: None,
            phone: None,
        }
    }
}
