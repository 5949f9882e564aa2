use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::save_notification_config::RequestBody;
use lembrete_domain::NotificationConfig;
use lembrete_infra::LembreteContext;

pub async fn get_notification_config_controller(
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    execute(GetNotificationConfigUseCase, &ctx)
        .await
        .map(|config| HttpResponse::Ok().json(config))
        .map_err(LembreteError::from)
}

pub async fn save_notification_config_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let usecase = SaveNotificationConfigUseCase { config: body.0 };
    execute(usecase, &ctx)
        .await
        .map(|config| HttpResponse::Ok().json(config))
        .map_err(LembreteError::from)
}

#[derive(Debug)]
pub struct GetNotificationConfigUseCase;

#[derive(Debug)]
pub struct SaveNotificationConfigUseCase {
    pub config: NotificationConfig,
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
impl UseCase for GetNotificationConfigUseCase {
    type Response = NotificationConfig;

    type Error = UseCaseError;

    const NAME: &'static str = "GetNotificationConfig";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .settings
            .notification_config()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SaveNotificationConfigUseCase {
    type Response = NotificationConfig;

    type Error = UseCaseError;

    const NAME: &'static str = "SaveNotificationConfig";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .settings
            .save_notification_config(&self.config)
            .await
            .map(|_| self.config)
            .map_err(|_| UseCaseError::StorageError)
    }
}
