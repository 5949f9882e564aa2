use super::dispatch::dispatch_reminder;
use crate::error::LembreteError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lembrete_api_structs::send_reminder_now::*;
use lembrete_domain::{Reminder, ReminderState, ID};
use lembrete_infra::LembreteContext;

pub async fn send_reminder_now_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<LembreteContext>,
) -> Result<HttpResponse, LembreteError> {
    let usecase = SendReminderNowUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|(reminder, delivered)| HttpResponse::Ok().json(APIResponse::new(reminder, delivered)))
        .map_err(LembreteError::from)
}

/// Dispatches a reminder right away, whether it is due or not. This is
/// also the way out of the failed state.
#[derive(Debug)]
pub struct SendReminderNowUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlreadySent(ID),
    /// A scheduler pass is delivering it right now
    DispatchInProgress(ID),
    StorageError,
}

impl From<UseCaseError> for LembreteError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The reminder with id: {}, was not found.", id))
            }
            UseCaseError::AlreadySent(id) => {
                Self::Conflict(format!("The reminder with id: {}, was already sent.", id))
            }
            UseCaseError::DispatchInProgress(id) => Self::Conflict(format!(
                "The reminder with id: {}, is being sent right now.",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendReminderNowUseCase {
    /// The reminder after the attempt and whether it was delivered
    type Response = (Reminder, bool);

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminderNow";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))?;

        if reminder.state == ReminderState::Dispatching {
            return Err(UseCaseError::DispatchInProgress(reminder.id));
        }
        if !reminder.begin_dispatch() {
            return Err(UseCaseError::AlreadySent(reminder.id));
        }
        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let sender = ctx
            .repos
            .settings
            .sender_identity()
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let delivered = dispatch_reminder(&reminder, &sender, ctx).await;
        if delivered {
            reminder.mark_sent();
        } else {
            reminder.record_failure(ctx.sys.get_timestamp_millis(), &ctx.config.retry_policy);
        }
        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok((reminder, delivered))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, Channel, RecordingNotifier, HOUR, NOW};
    use lembrete_domain::{ReminderChannel, ReminderState, RetryPolicy, SenderIdentity};

    async fn setup_reminder(ctx: &LembreteContext) -> Reminder {
        ctx.repos
            .settings
            .save_sender_identity(&SenderIdentity {
                name: "Dr. Djair".into(),
                email: Some("djair@example.com".into()),
                phone: None,
            })
            .await
            .unwrap();
        let reminder = Reminder::new_auto(
            ID::from("hearing-1"),
            "Audiência X".into(),
            NOW + 30 * HOUR,
            ReminderChannel::Email,
            NOW,
        )
        .unwrap();
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        reminder
    }

    #[actix_web::main]
    #[test]
    async fn sends_reminder_before_it_is_due() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        let reminder = setup_reminder(&ctx).await;

        let mut usecase = SendReminderNowUseCase {
            reminder_id: reminder.id.clone(),
        };
        let (sent, delivered) = usecase.execute(&ctx).await.unwrap();
        assert!(delivered);
        assert!(sent.is_sent());
        assert_eq!(notifier.sent_on(Channel::Email).len(), 1);

        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::AlreadySent(reminder.id)
        );
    }

    #[actix_web::main]
    #[test]
    async fn recovers_failed_reminder() {
        let (mut ctx, _) = setup_context(NOW, RecordingNotifier::new());
        ctx.config.retry_policy = RetryPolicy {
            max_attempts: 1,
            backoff_millis: 1000,
        };
        let mut reminder = setup_reminder(&ctx).await;
        reminder.begin_dispatch();
        reminder.record_failure(NOW, &ctx.config.retry_policy);
        assert_eq!(reminder.state, ReminderState::Failed);
        ctx.repos.reminders.save(&reminder).await.unwrap();

        let mut usecase = SendReminderNowUseCase {
            reminder_id: reminder.id.clone(),
        };
        let (sent, _) = usecase.execute(&ctx).await.unwrap();
        assert_eq!(sent.state, ReminderState::Sent);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_reminder_being_dispatched() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        let mut reminder = setup_reminder(&ctx).await;
        reminder.begin_dispatch();
        ctx.repos.reminders.save(&reminder).await.unwrap();

        let mut usecase = SendReminderNowUseCase {
            reminder_id: reminder.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::DispatchInProgress(reminder.id.clone())
        );
        assert!(notifier.sent().is_empty());
        let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap().unwrap();
        assert_eq!(stored.state, ReminderState::Dispatching);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_reminder() {
        let (ctx, _) = setup_context(NOW, RecordingNotifier::new());
        let mut usecase = SendReminderNowUseCase {
            reminder_id: ID::from("reminder-404"),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(ID::from("reminder-404"))
        );
    }
}
