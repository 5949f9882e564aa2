mod email;
mod http;
mod simulated;
mod whatsapp;

pub use email::{render_email_html, EmailClient};
pub use http::HttpNotifier;
use lembrete_domain::Notification;
pub use simulated::SimulatedNotifier;
pub use whatsapp::{format_whatsapp_message, wa_me_link, WhatsAppClient, WhatsAppDelivery};

/// Delivers a `Notification` through one channel.
///
/// Implementations never fail: a missing configuration, a missing address
/// or a failing endpoint is logged and reported as `false`.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send_email(&self, notification: &Notification) -> bool;
    async fn send_whatsapp(&self, notification: &Notification) -> bool;
}
