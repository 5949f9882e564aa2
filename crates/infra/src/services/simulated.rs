use super::whatsapp::format_whatsapp_message;
use super::INotifier;
use lembrete_domain::Notification;
use std::time::Duration;
use tracing::info;

/// Pretends to deliver every notification after a fixed latency
pub struct SimulatedNotifier {
    latency: Duration,
}

impl SimulatedNotifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait::async_trait]
impl INotifier for SimulatedNotifier {
    async fn send_email(&self, notification: &Notification) -> bool {
        tokio::time::sleep(self.latency).await;
        info!(
            to = notification.recipient.email().unwrap_or("-"),
            subject = notification.title.as_str(),
            "Simulated e-mail sent"
        );
        true
    }

    async fn send_whatsapp(&self, notification: &Notification) -> bool {
        let message = format_whatsapp_message(notification);
        tokio::time::sleep(self.latency).await;
        info!(
            to = notification.recipient.phone().unwrap_or("-"),
            message = message.as_str(),
            "Simulated WhatsApp message sent"
        );
        true
    }
}
