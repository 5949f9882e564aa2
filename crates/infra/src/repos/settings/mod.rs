mod kv;

pub use kv::KVSettingsRepo;
use lembrete_domain::{NotificationConfig, NotificationHour, SenderIdentity, WhatsAppConfig};

/// Settings stored by the staff dashboard
#[async_trait::async_trait]
pub trait ISettingsRepo: Send + Sync {
    /// The default hour when none is stored
    async fn notification_hour(&self) -> anyhow::Result<NotificationHour>;
    async fn save_notification_hour(&self, hour: NotificationHour) -> anyhow::Result<()>;
    /// The default config (everything enabled) when none is stored
    async fn notification_config(&self) -> anyhow::Result<NotificationConfig>;
    async fn save_notification_config(&self, config: &NotificationConfig) -> anyhow::Result<()>;
    async fn whatsapp_config(&self) -> anyhow::Result<Option<WhatsAppConfig>>;
    async fn save_whatsapp_config(&self, config: &WhatsAppConfig) -> anyhow::Result<()>;
    async fn sender_identity(&self) -> anyhow::Result<SenderIdentity>;
    async fn save_sender_identity(&self, sender: &SenderIdentity) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::setup_test_contexts;
    use lembrete_domain::{NotificationConfig, NotificationHour, SenderIdentity, WhatsAppConfig};

    #[tokio::test]
    async fn test_settings_defaults_and_updates() {
        let (_dir, contexts) = setup_test_contexts();
        for ctx in contexts {
            let settings = ctx.repos.settings;

            assert_eq!(settings.notification_hour().await.unwrap().hour(), 9);
            let hour = NotificationHour::new(7).unwrap();
            assert!(settings.save_notification_hour(hour).await.is_ok());
            assert_eq!(settings.notification_hour().await.unwrap(), hour);

            assert_eq!(
                settings.notification_config().await.unwrap(),
                NotificationConfig::default()
            );
            let config = NotificationConfig {
                whatsapp: false,
                ..Default::default()
            };
            assert!(settings.save_notification_config(&config).await.is_ok());
            assert_eq!(settings.notification_config().await.unwrap(), config);

            assert!(settings.whatsapp_config().await.unwrap().is_none());
            let whatsapp = WhatsAppConfig {
                link_id: "link".into(),
                token: "token".into(),
                phone_number: "5519999990000".into(),
            };
            assert!(settings.save_whatsapp_config(&whatsapp).await.is_ok());
            assert_eq!(settings.whatsapp_config().await.unwrap(), Some(whatsapp));

            assert_eq!(
                settings.sender_identity().await.unwrap(),
                SenderIdentity::default()
            );
            let sender = SenderIdentity {
                name: "Djair Rota".into(),
                email: Some("contato@djairrota.adv.br".into()),
                phone: None,
            };
            assert!(settings.save_sender_identity(&sender).await.is_ok());
            assert_eq!(settings.sender_identity().await.unwrap(), sender);
        }
    }
}
