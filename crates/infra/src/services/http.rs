use super::email::EmailClient;
use super::whatsapp::WhatsAppClient;
use super::INotifier;
use crate::config::Config;
use crate::repos::ISettingsRepo;
use lembrete_domain::Notification;
use std::sync::Arc;
use tracing::error;

/// Delivers notifications through the real e-mail and WhatsApp endpoints.
/// WhatsApp credentials are read from the settings on every send.
pub struct HttpNotifier {
    email: EmailClient,
    whatsapp: WhatsAppClient,
    settings: Arc<dyn ISettingsRepo>,
}

impl HttpNotifier {
    pub fn new(config: &Config, settings: Arc<dyn ISettingsRepo>) -> Self {
        Self {
            email: EmailClient::new(config.email_api_url.clone(), config.email_api_key.clone()),
            whatsapp: WhatsAppClient::new(config.whatsapp_api_url.clone()),
            settings,
        }
    }
}

#[async_trait::async_trait]
impl INotifier for HttpNotifier {
    async fn send_email(&self, notification: &Notification) -> bool {
        self.email.send(notification).await
    }

    async fn send_whatsapp(&self, notification: &Notification) -> bool {
        let config = match self.settings.whatsapp_config().await {
            Ok(config) => config,
            Err(e) => {
                error!("Unable to read the WhatsApp config. Error: {:?}", e);
                return false;
            }
        };
        self.whatsapp
            .send(config.as_ref(), notification)
            .await
            .is_sent()
    }
}
