use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::get_events::*;
use lembrete_domain::ScheduledEvent;
use lembrete_infra::LembreteContext;

pub async fn get_events_controller(
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    execute(GetEventsUseCase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(LembreteError::from)
}

#[derive(Debug)]
pub struct GetEventsUseCase;

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
impl UseCase for GetEventsUseCase {
    type Response = Vec<ScheduledEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
