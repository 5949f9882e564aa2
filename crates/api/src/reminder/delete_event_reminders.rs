use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::delete_event_reminders::*;
use lembrete_domain::ID;
use lembrete_infra::{DeleteResult, LembreteContext};

pub async fn delete_event_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let usecase = DeleteEventRemindersUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                deleted_count: res.deleted_count,
            })
        })
        .map_err(LembreteError::from)
}

/// Removes every reminder attached to the event
#[derive(Debug)]
pub struct DeleteEventRemindersUseCase {
    pub event_id: ID,
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
impl UseCase for DeleteEventRemindersUseCase {
    type Response = DeleteResult;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEventReminders";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .delete_by_event(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, RecordingNotifier, HOUR, NOW};
    use lembrete_domain::{Reminder, ReminderChannel};

    #[actix_web::main]
    #[test]
    async fn removes_only_reminders_of_the_event() {
        let (ctx, _) = setup_context(NOW, RecordingNotifier::new());
        let reminder = |event_id: &str| {
            Reminder::new_auto(
                ID::from(event_id),
                "Prazo".into(),
                NOW + 30 * HOUR,
                ReminderChannel::Both,
                NOW,
            )
            .unwrap()
        };
        let other = reminder("2");
        for r in &[reminder("1"), reminder("1"), other.clone()] {
            ctx.repos.reminders.insert(r).await.unwrap();
        }

        let mut usecase = DeleteEventRemindersUseCase {
            event_id: ID::from("1"),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().deleted_count, 2);
        assert_eq!(ctx.repos.reminders.find_all().await.unwrap(), vec![other]);
        assert_eq!(usecase.execute(&ctx).await.unwrap().deleted_count, 0);
    }
}
