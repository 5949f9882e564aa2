use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::get_pending_reminders::*;
use lembrete_domain::Reminder;
use lembrete_infra::LembreteContext;

pub async fn get_pending_reminders_controller(
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    execute(GetPendingRemindersUseCase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(LembreteError::from)
}

/// Reminders not sent yet whose reminder date is still in the future
#[derive(Debug)]
pub struct GetPendingRemindersUseCase;

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
impl UseCase for GetPendingRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPendingReminders";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminders.into_iter().filter(|r| r.is_pending(now)).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, RecordingNotifier, HOUR, NOW};
    use lembrete_domain::{ReminderChannel, ID};

    #[actix_web::main]
    #[test]
    async fn excludes_sent_and_past_reminders() {
        let (ctx, _) = setup_context(NOW, RecordingNotifier::new());
        let created_at = NOW - 10 * HOUR;
        let reminder = |hours: i64| {
            Reminder::new_auto(
                ID::from("1"),
                "Prazo".into(),
                NOW + hours * HOUR,
                ReminderChannel::Email,
                created_at,
            )
            .unwrap()
        };

        let pending = reminder(30);
        let past = reminder(20);
        let mut sent = reminder(40);
        sent.begin_dispatch();
        sent.mark_sent();
        for r in &[&pending, &past, &sent] {
            ctx.repos.reminders.insert(r).await.unwrap();
        }

        let res = GetPendingRemindersUseCase.execute(&ctx).await.unwrap();
        assert_eq!(res, vec![pending]);
    }
}
