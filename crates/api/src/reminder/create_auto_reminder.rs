use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::create_auto_reminder::*;
use lembrete_domain::{date::is_representable, Reminder, ReminderChannel, ID};
use lembrete_infra::LembreteContext;
use tracing::info;

pub async fn create_auto_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let body = body.0;
    let usecase = CreateAutoReminderUseCase {
        event_id: body.event_id,
        event_title: body.event_title,
        event_date: body.event_date,
        channel: body.channel.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| match reminder {
            Some(_) => HttpResponse::Created().json(APIResponse::new(reminder)),
            None => HttpResponse::Ok().json(APIResponse::new(reminder)),
        })
        .map_err(LembreteError::from)
}

/// Creates the reminder sent to the staff 24 hours before an event.
/// Nothing is created for events less than 24 hours away.
#[derive(Debug)]
pub struct CreateAutoReminderUseCase {
    pub event_id: ID,
    pub event_title: String,
    pub event_date: i64,
    pub channel: ReminderChannel,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidEventDate(i64),
    StorageError,
}

impl From<UseCaseError> for LembreteError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEventDate(date) => {
                Self::BadClientData(format!("Invalid event date: {}", date))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAutoReminderUseCase {
    type Response = Option<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateAutoReminder";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        if !is_representable(self.event_date) {
            return Err(UseCaseError::InvalidEventDate(self.event_date));
        }

        let reminder = match Reminder::new_auto(
            self.event_id.clone(),
            self.event_title.clone(),
            self.event_date,
            self.channel,
            ctx.sys.get_timestamp_millis(),
        ) {
            Some(reminder) => reminder,
            None => {
                info!(
                    "Event: {} is less than 24 hours away, no reminder created",
                    self.event_id
                );
                return Ok(None);
            }
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(Some(reminder))
    }
}
