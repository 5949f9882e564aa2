use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::{get_notification_time, set_notification_time};
use lembrete_domain::NotificationHour;
use lembrete_infra::LembreteContext;
use tracing::warn;

pub async fn get_notification_time_controller(
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    execute(GetNotificationTimeUseCase, &ctx)
        .await
        .map(|hour| {
            HttpResponse::Ok().json(get_notification_time::APIResponse { hour: hour.hour() })
        })
        .map_err(LembreteError::from)
}

pub async fn set_notification_time_controller(
    body: web::Json<set_notification_time::RequestBody>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let hour = body.hour;
    let updated = execute(SetNotificationTimeUseCase { hour }, &ctx).await?;
    if !updated {
        return Err(LembreteError::BadClientData(format!(
            "Invalid notification hour: {}. Expected a value between 0 and 23",
            hour
        )));
    }
    Ok(HttpResponse::Ok().json(set_notification_time::APIResponse { hour: hour as u8 }))
}

#[derive(Debug)]
pub struct GetNotificationTimeUseCase;

/// Updates the preferred hour. Responds `false`, leaving the stored hour
/// untouched, when the hour is outside 0-23.
#[derive(Debug)]
pub struct SetNotificationTimeUseCase {
    pub hour: i64,
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
impl UseCase for GetNotificationTimeUseCase {
    type Response = NotificationHour;

    type Error = UseCaseError;

    const NAME: &'static str = "GetNotificationTime";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .settings
            .notification_hour()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetNotificationTimeUseCase {
    type Response = bool;

    type Error = UseCaseError;

    const NAME: &'static str = "SetNotificationTime";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let hour = match NotificationHour::new(self.hour) {
            Some(hour) => hour,
            None => {
                warn!("Rejected notification hour: {}", self.hour);
                return Ok(false);
            }
        };

        ctx.repos
            .settings
            .save_notification_hour(hour)
            .await
            .map(|_| true)
            .map_err(|_| UseCaseError::StorageError)
    }
}
