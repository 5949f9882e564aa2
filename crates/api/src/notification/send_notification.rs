use super::fan_out;
use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::send_notification::*;
use lembrete_domain::{DispatchReport, Notification};
use lembrete_infra::LembreteContext;
use tracing::info;

pub async fn send_notification_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let body = body.0;
    let usecase = SendNotificationUseCase {
        notification: Notification {
            kind: body.kind,
            title: body.title,
            message: body.message,
            recipient: body.recipient,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(report))
        .map_err(LembreteError::from)
}

/// Sends a notification through every channel the stored preferences
/// allow and the recipient has an address for
#[derive(Debug)]
pub struct SendNotificationUseCase {
    pub notification: Notification,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for LembreteError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendNotificationUseCase {
    type Response = DispatchReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendNotification";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let config = ctx
            .repos
            .settings
            .notification_config()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if !config.allows(self.notification.kind) {
            info!(
                "Notifications of type {:?} are disabled, not sending: {}",
                self.notification.kind, self.notification.title
            );
            return Ok(DispatchReport::default());
        }

        let recipient = &self.notification.recipient;
        let email = config.email && recipient.email().is_some();
        let whatsapp = config.whatsapp && recipient.phone().is_some();

        Ok(fan_out(&self.notification, email, whatsapp, ctx).await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, Channel, RecordingNotifier, NOW};
    use lembrete_domain::{NotificationConfig, NotificationKind, Recipient};

    fn notification(kind: NotificationKind) -> Notification {
        Notification {
            kind,
            title: "Prazo".into(),
            message: "Contestação vence amanhã".into(),
            recipient: Recipient {
                name: "Maria".into(),
                email: Some("maria@example.com".into()),
                phone: Some("(19) 99999-0000".into()),
            },
        }
    }

    async fn save_config(ctx: &LembreteContext, config: NotificationConfig) {
        ctx.repos
            .settings
            .save_notification_config(&config)
            .await
            .unwrap();
    }

    #[actix_web::main]
    #[test]
    async fn sends_on_both_channels_by_default() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        let mut usecase = SendNotificationUseCase {
            notification: notification(NotificationKind::Prazo),
        };
        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            report,
            DispatchReport {
                email: true,
                whatsapp: true
            }
        );
        assert_eq!(notifier.sent().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn respects_disabled_kind_and_channels() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        save_config(
            &ctx,
            NotificationConfig {
                whatsapp: false,
                prazos: false,
                ..Default::default()
            },
        )
        .await;

        let mut usecase = SendNotificationUseCase {
            notification: notification(NotificationKind::Prazo),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap(), DispatchReport::default());
        assert!(notifier.sent().is_empty());

        let mut usecase = SendNotificationUseCase {
            notification: notification(NotificationKind::Audiencia),
        };
        let report = usecase.execute(&ctx).await.unwrap();
        assert!(report.email && !report.whatsapp);
        assert!(notifier.sent_on(Channel::WhatsApp).is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn reminders_can_not_be_disabled() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        save_config(
            &ctx,
            NotificationConfig {
                audiencias: false,
                prazos: false,
                atualizacoes: false,
                ..Default::default()
            },
        )
        .await;

        let mut usecase = SendNotificationUseCase {
            notification: notification(NotificationKind::Lembrete),
        };
        assert!(usecase.execute(&ctx).await.unwrap().any());
        assert_eq!(notifier.sent().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn skips_channels_without_address() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        let mut n = notification(NotificationKind::Atualizacao);
        n.recipient.phone = None;

        let mut usecase = SendNotificationUseCase { notification: n };
        let report = usecase.execute(&ctx).await.unwrap();
        assert!(report.email && !report.whatsapp);
        assert_eq!(notifier.sent_on(Channel::Email).len(), 1);
        assert!(notifier.sent_on(Channel::WhatsApp).is_empty());
    }
}
