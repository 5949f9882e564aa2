use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::save_sender_identity::RequestBody;
use lembrete_domain::SenderIdentity;
use lembrete_infra::LembreteContext;

pub async fn get_sender_identity_controller(
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    execute(GetSenderIdentityUseCase, &ctx)
        .await
        .map(|sender| HttpResponse::Ok().json(sender))
        .map_err(LembreteError::from)
}

pub async fn save_sender_identity_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let body = body.0;
    let usecase = SaveSenderIdentityUseCase {
        name: body.name,
        email: body.email,
        phone: body.phone,
    };
    execute(usecase, &ctx)
        .await
        .map(|sender| HttpResponse::Ok().json(sender))
        .map_err(LembreteError::from)
}

#[derive(Debug)]
pub struct GetSenderIdentityUseCase;

/// Blank fields are cleared, a blank name falls back to the default one
#[derive(Debug)]
pub struct SaveSenderIdentityUseCase {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
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

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSenderIdentityUseCase {
    type Response = SenderIdentity;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSenderIdentity";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .settings
            .sender_identity()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SaveSenderIdentityUseCase {
    type Response = SenderIdentity;

    type Error = UseCaseError;

    const NAME: &'static str = "SaveSenderIdentity";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let sender = SenderIdentity {
            name: non_blank(&self.name).unwrap_or_else(|| SenderIdentity::default().name),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
        };

        ctx.repos
            .settings
            .save_sender_identity(&sender)
            .await
            .map(|_| sender)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, RecordingNotifier, NOW};

    #[actix_web::main]
    #[test]
    async fn blank_name_falls_back_to_default() {
        let (ctx, _) = setup_context(NOW, RecordingNotifier::new());
        let mut usecase = SaveSenderIdentityUseCase {
            name: Some("  ".into()),
            email: Some("dra.rota@example.com".into()),
            phone: Some("".into()),
        };

        let sender = usecase.execute(&ctx).await.unwrap();
        assert_eq!(sender.name, "Usuário");
        assert_eq!(sender.email.as_deref(), Some("dra.rota@example.com"));
        assert_eq!(sender.phone, None);
        assert_eq!(GetSenderIdentityUseCase.execute(&ctx).await.unwrap(), sender);
    }
}
