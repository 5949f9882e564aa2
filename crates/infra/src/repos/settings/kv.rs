use super::ISettingsRepo;
use crate::repos::kv::IKVRepo;
use anyhow::Context;
use lembrete_domain::{NotificationConfig, NotificationHour, SenderIdentity, WhatsAppConfig};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

const NOTIFICATION_HOUR_KEY: &str = "notificationTimeConfig";
const NOTIFICATION_CONFIG_KEY: &str = "notification_config";
const WHATSAPP_CONFIG_KEY: &str = "whatsappConfig";
const SENDER_NAME_KEY: &str = "advogado_name";
const SENDER_EMAIL_KEY: &str = "advogado_email";
const SENDER_PHONE_KEY: &str = "advogado_phone";

pub struct KVSettingsRepo {
    kv: Arc<dyn IKVRepo>,
}

impl KVSettingsRepo {
    pub fn new(kv: Arc<dyn IKVRepo>) -> Self {
        Self { kv }
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        match self.kv.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .with_context(|| format!("Malformed value stored under key: {}", key)),
            None => Ok(None),
        }
    }

    async fn get_text(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self
            .kv
            .get(key)
            .await?
            .filter(|value| !value.trim().is_empty()))
    }

    async fn set_text(&self, key: &str, value: Option<&str>) -> anyhow::Result<()> {
        match value {
            Some(value) if !value.trim().is_empty() => self.kv.set(key, value).await,
            _ => self.kv.delete(key).await,
        }
    }
}

#[async_trait::async_trait]
impl ISettingsRepo for KVSettingsRepo {
    async fn notification_hour(&self) -> anyhow::Result<NotificationHour> {
        let raw = match self.kv.get(NOTIFICATION_HOUR_KEY).await? {
            Some(raw) => raw,
            None => return Ok(NotificationHour::default()),
        };
        let hour = raw.trim().parse::<i64>().ok().and_then(NotificationHour::new);
        Ok(hour.unwrap_or_else(|| {
            warn!(
                "Stored notification hour: {} is not valid, using the default hour",
                raw
            );
            NotificationHour::default()
        }))
    }

    async fn save_notification_hour(&self, hour: NotificationHour) -> anyhow::Result<()> {
        self.kv
            .set(NOTIFICATION_HOUR_KEY, &hour.hour().to_string())
            .await
    }

    async fn notification_config(&self) -> anyhow::Result<NotificationConfig> {
        Ok(self
            .get_json(NOTIFICATION_CONFIG_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn save_notification_config(&self, config: &NotificationConfig) -> anyhow::Result<()> {
        self.kv
            .set(NOTIFICATION_CONFIG_KEY, &serde_json::to_string(config)?)
            .await
    }

    async fn whatsapp_config(&self) -> anyhow::Result<Option<WhatsAppConfig>> {
        self.get_json(WHATSAPP_CONFIG_KEY).await
    }

    async fn save_whatsapp_config(&self, config: &WhatsAppConfig) -> anyhow::Result<()> {
        self.kv
            .set(WHATSAPP_CONFIG_KEY, &serde_json::to_string(config)?)
            .await
    }

    async fn sender_identity(&self) -> anyhow::Result<SenderIdentity> {
        let mut sender = SenderIdentity::default();
        if let Some(name) = self.get_text(SENDER_NAME_KEY).await? {
            sender.name = name;
        }
        sender.email = self.get_text(SENDER_EMAIL_KEY).await?;
        sender.phone = self.get_text(SENDER_PHONE_KEY).await?;
        Ok(sender)
    }

    async fn save_sender_identity(&self, sender: &SenderIdentity) -> anyhow::Result<()> {
        self.set_text(SENDER_NAME_KEY, Some(&sender.name)).await?;
        self.set_text(SENDER_EMAIL_KEY, sender.email.as_deref())
            .await?;
        self.set_text(SENDER_PHONE_KEY, sender.phone.as_deref())
            .await
    }
}
