use super::subscribers::CreateReminderOnEventCreated;
use crate::error::LembreteError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::create_event::*;
use lembrete_domain::{date::is_representable, EventKind, ReminderChannel, ScheduledEvent, ID};
use lembrete_infra::LembreteContext;

pub async fn create_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let body = body.0;
    let usecase = CreateEventUseCase {
        title: body.title,
        date: body.date,
        client_name: body.client_name,
        client_email: body.client_email,
        client_phone: body.client_phone,
        process_number: body.process_number,
        kind: body.kind.unwrap_or_default(),
        reminder_channel: body.reminder_channel.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(LembreteError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub title: String,
    pub date: i64,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub process_number: Option<String>,
    pub kind: EventKind,
    pub reminder_channel: ReminderChannel,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidEvent(String),
    StorageError,
}

impl From<UseCaseError> for LembreteError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEvent(reason) => Self::BadClientData(reason),
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
impl UseCase for CreateEventUseCase {
    type Response = ScheduledEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        if self.title.trim().is_empty() {
            return Err(UseCaseError::InvalidEvent("The event needs a title".into()));
        }
        if self.client_name.trim().is_empty() {
            return Err(UseCaseError::InvalidEvent(
                "The event needs a client name".into(),
            ));
        }
        if !is_representable(self.date) {
            return Err(UseCaseError::InvalidEvent(format!(
                "Invalid event date: {}",
                self.date
            )));
        }

        let now = ctx.sys.get_timestamp_millis();
        let e = ScheduledEvent {
            id: ID::with_prefix("event", now),
            title: self.title.trim().to_string(),
            date: self.date,
            client_name: self.client_name.trim().to_string(),
            client_email: non_blank(&self.client_email),
            client_phone: non_blank(&self.client_phone),
            process_number: non_blank(&self.process_number),
            kind: self.kind,
            reminder_channel: self.reminder_channel,
            created: now,
        };

        ctx.repos
            .events
            .insert(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateReminderOnEventCreated)]
    }
}
