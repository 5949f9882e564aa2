use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::get_upcoming_reminders::*;
use lembrete_domain::Reminder;
use lembrete_infra::LembreteContext;

pub async fn get_upcoming_reminders_controller(
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    execute(GetUpcomingRemindersUseCase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(LembreteError::from)
}

/// Pending reminders due within the next 48 hours
#[derive(Debug)]
pub struct GetUpcomingRemindersUseCase;

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
impl UseCase for GetUpcomingRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUpcomingReminders";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminders
            .into_iter()
            .filter(|r| r.is_upcoming(now))
            .collect())
    }
}
