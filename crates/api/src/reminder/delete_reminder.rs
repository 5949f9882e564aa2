use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::delete_reminder::*;
use lembrete_domain::{Reminder, ID};
use lembrete_infra::LembreteContext;

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|deleted| {
            HttpResponse::Ok().json(APIResponse {
                deleted: deleted.is_some(),
            })
        })
        .map_err(LembreteError::from)
}

/// Deleting an unknown reminder is not an error
#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
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
impl UseCase for DeleteReminderUseCase {
    type Response = Option<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .delete(&self.reminder_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, RecordingNotifier, HOUR, NOW};
    use lembrete_domain::ReminderChannel;

    #[actix_web::main]
    #[test]
    async fn deleting_twice_is_idempotent() {
        let (ctx, _) = setup_context(NOW, RecordingNotifier::new());
        let reminder = Reminder::new_auto(
            ID::from("1"),
            "Audiência".into(),
            NOW + 30 * HOUR,
            ReminderChannel::Both,
            NOW,
        )
        .unwrap();
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = DeleteReminderUseCase {
            reminder_id: reminder.id.clone(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap(), Some(reminder));
        assert_eq!(usecase.execute(&ctx).await.unwrap(), None);
        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());
    }
}
