use super::fan_out;
use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::notify_process_update::*;
use lembrete_domain::{DispatchReport, Notification, ProcessUpdateKind, Recipient};
use lembrete_infra::LembreteContext;

pub async fn notify_process_update_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let body = body.0;
    let usecase = NotifyProcessUpdateUseCase {
        recipient: Recipient {
            name: body.client_name,
            email: body.client_email,
            phone: body.client_phone,
        },
        process_number: body.process_number,
        update_kind: body.update_type,
        details: body.details,
    };

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(report))
        .map_err(LembreteError::from)
}

/// Tells a client about a change in one of their legal processes, on
/// every channel the client has an address for
#[derive(Debug)]
pub struct NotifyProcessUpdateUseCase {
    pub recipient: Recipient,
    pub process_number: String,
    pub update_kind: ProcessUpdateKind,
    pub details: String,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for LembreteError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for NotifyProcessUpdateUseCase {
    type Response = DispatchReport;

    type Error = UseCaseError;

    const NAME: &'static str = "NotifyProcessUpdate";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let notification = Notification {
            kind: self.update_kind.notification_kind(),
            title: self.update_kind.subject().into(),
            message: self
                .update_kind
                .message(&self.process_number, &self.details),
            recipient: self.recipient.clone(),
        };
        let email = notification.recipient.email().is_some();
        let whatsapp = notification.recipient.phone().is_some();

        Ok(fan_out(&notification, email, whatsapp, ctx).await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, Channel, RecordingNotifier, NOW};

    #[actix_web::main]
    #[test]
    async fn notifies_client_on_available_channels() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        let mut usecase = NotifyProcessUpdateUseCase {
            recipient: Recipient {
                name: "Maria Silva".into(),
                email: Some("maria@example.com".into()),
                phone: None,
            },
            process_number: "0001234-56.2024".into(),
            update_kind: ProcessUpdateKind::StatusAlterado,
            details: "Sentença publicada".into(),
        };

        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            report,
            DispatchReport {
                email: true,
                whatsapp: false
            }
        );
        let emails = notifier.sent_on(Channel::Email);
        assert_eq!(emails[0].title, "Status do Processo Atualizado");
        assert!(emails[0]
            .message
            .starts_with("O status do processo 0001234-56.2024 foi atualizado.\n\nSentença publicada"));
        assert!(notifier.sent_on(Channel::WhatsApp).is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn nothing_is_sent_without_addresses() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        let mut usecase = NotifyProcessUpdateUseCase {
            recipient: Recipient {
                name: "Maria Silva".into(),
                email: None,
                phone: Some(" ".into()),
            },
            process_number: "N/A".into(),
            update_kind: ProcessUpdateKind::NovaMovimentacao,
            details: "".into(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap(), DispatchReport::default());
        assert!(notifier.sent().is_empty());
    }
}
