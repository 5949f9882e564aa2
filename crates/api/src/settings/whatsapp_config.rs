use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::{get_whatsapp_config, save_whatsapp_config};
use lembrete_domain::WhatsAppConfig;
use lembrete_infra::LembreteContext;

pub async fn get_whatsapp_config_controller(
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    execute(GetWhatsAppConfigUseCase, &ctx)
        .await
        .map(|config| HttpResponse::Ok().json(get_whatsapp_config::APIResponse { config }))
        .map_err(LembreteError::from)
}

pub async fn save_whatsapp_config_controller(
    body: web::Json<save_whatsapp_config::RequestBody>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let usecase = SaveWhatsAppConfigUseCase { config: body.0 };
    execute(usecase, &ctx)
        .await
        .map(|config| HttpResponse::Ok().json(save_whatsapp_config::APIResponse { config }))
        .map_err(LembreteError::from)
}

#[derive(Debug)]
pub struct GetWhatsAppConfigUseCase;

#[derive(Debug)]
pub struct SaveWhatsAppConfigUseCase {
    pub config: WhatsAppConfig,
}

#[derive(Debug)]
pub enum UseCaseError {
    IncompleteConfig,
    StorageError,
}

impl From<UseCaseError> for LembreteError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::IncompleteConfig => Self::BadClientData(
                "The WhatsApp config needs a linkId, a token and a phoneNumber".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetWhatsAppConfigUseCase {
    type Response = Option<WhatsAppConfig>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetWhatsAppConfig";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .settings
            .whatsapp_config()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SaveWhatsAppConfigUseCase {
    type Response = WhatsAppConfig;

    type Error = UseCaseError;

    const NAME: &'static str = "SaveWhatsAppConfig";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        if !self.config.is_complete() {
            return Err(UseCaseError::IncompleteConfig);
        }

        ctx.repos
            .settings
            .save_whatsapp_config(&self.config)
            .await
            .map(|_| self.config.clone())
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, RecordingNotifier, NOW};

    fn config() -> WhatsAppConfig {
        WhatsAppConfig {
            link_id: "link-1".into(),
            token: "secret".into(),
            phone_number: "5519999990000".into(),
        }
    }

    #[actix_web::main]
    #[test]
    async fn saves_complete_config() {
        let (ctx, _) = setup_context(NOW, RecordingNotifier::new());
        assert!(GetWhatsAppConfigUseCase.execute(&ctx).await.unwrap().is_none());

        SaveWhatsAppConfigUseCase { config: config() }
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(
            GetWhatsAppConfigUseCase.execute(&ctx).await.unwrap(),
            Some(config())
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_config_without_phone() {
        let (ctx, _) = setup_context(NOW, RecordingNotifier::new());
        let mut incomplete = config();
        incomplete.phone_number = " ".into();

        let res = SaveWhatsAppConfigUseCase { config: incomplete }
            .execute(&ctx)
            .await;
        assert!(matches!(res, Err(UseCaseError::IncompleteConfig)));
        assert!(GetWhatsAppConfigUseCase.execute(&ctx).await.unwrap().is_none());
    }
}
