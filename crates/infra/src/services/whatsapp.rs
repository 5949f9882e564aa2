use lembrete_domain::{Notification, WhatsAppConfig};
use lembrete_utils::only_digits;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, warn};

const FALLBACK_BASE_URL: &str = "https://wa.me";

#[derive(Debug, Serialize)]
struct SendWhatsAppRequest<'a> {
    link_id: &'a str,
    phone: &'a str,
    message: &'a str,
}

/// What happened to a WhatsApp message
#[derive(Debug, Clone, PartialEq)]
pub enum WhatsAppDelivery {
    Sent,
    /// The endpoint failed; the message can still be sent by hand through the link
    Fallback(String),
    /// Credentials or the recipient's phone number are missing
    NotConfigured,
}

impl WhatsAppDelivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Message text with the firm's signature
pub fn format_whatsapp_message(notification: &Notification) -> String {
    format!(
        "*{}*\n\nOlá, {}!\n\n{}\n\n---\n_Djair Rota Advogados_\n_Rua Coronel Diogo, 525 - Mococa/SP_\n_Tel: (19) 3656-4903_",
        notification.title,
        notification.recipient.name,
        notification.message.trim()
    )
}

/// Link that opens a chat with the message already typed in
pub fn wa_me_link(phone: &str, message: &str) -> String {
    let text = url::form_urlencoded::byte_serialize(message.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{}/{}?text={}", FALLBACK_BASE_URL, only_digits(phone), text)
}

/// Client for the WhatsApp sending endpoint
pub struct WhatsAppClient {
    client: Client,
    api_url: String,
}

impl WhatsAppClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
        }
    }

    pub async fn send(
        &self,
        config: Option<&WhatsAppConfig>,
        notification: &Notification,
    ) -> WhatsAppDelivery {
        let config = match config {
            Some(config) if config.has_credentials() => config,
            Some(_) => {
                warn!("WhatsApp credentials are incomplete");
                return WhatsAppDelivery::NotConfigured;
            }
            None => {
                warn!("WhatsApp is not configured");
                return WhatsAppDelivery::NotConfigured;
            }
        };
        let phone = match notification.recipient.phone() {
            Some(phone) => only_digits(phone),
            None => {
                warn!("No phone number for recipient: {}", notification.recipient.name);
                return WhatsAppDelivery::NotConfigured;
            }
        };

        let message = format_whatsapp_message(notification);
        let body = SendWhatsAppRequest {
            link_id: &config.link_id,
            phone: &phone,
            message: &message,
        };
        let res = self
            .client
            .post(&self.api_url)
            .bearer_auth(&config.token)
            .json(&body)
            .send()
            .await;

        match res {
            Ok(res) if res.status().is_success() => {
                info!("WhatsApp message sent to: {}", phone);
                WhatsAppDelivery::Sent
            }
            Ok(res) => {
                let link = wa_me_link(&phone, &message);
                warn!(
                    "WhatsApp endpoint responded with {}, send it manually through: {}",
                    res.status(),
                    link
                );
                WhatsAppDelivery::Fallback(link)
            }
            Err(e) => {
                let link = wa_me_link(&phone, &message);
                error!(
                    "Unable to send WhatsApp message. Error: {:?}. Send it manually through: {}",
                    e, link
                );
                WhatsAppDelivery::Fallback(link)
            }
        }
    }
}
