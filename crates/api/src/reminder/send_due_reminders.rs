use super::dispatch::dispatch_reminder;
use crate::shared::usecase::UseCase;
use futures::future::join_all;
use lembrete_domain::{Reminder, ReminderState, ID};
use lembrete_infra::LembreteContext;
use tracing::{error, info, warn};

/// One pass of the reminder check: dispatches every due `Reminder`
#[derive(Debug)]
pub struct SendDueRemindersUseCase;

#[derive(Debug, Default, PartialEq)]
pub struct DueRemindersReport {
    pub sent: Vec<ID>,
    /// Failed and scheduled for another attempt
    pub retrying: Vec<ID>,
    /// Failed and out of attempts
    pub failed: Vec<ID>,
}

impl DueRemindersReport {
    pub fn is_empty(&self) -> bool {
        self.sent.is_empty() && self.retrying.is_empty() && self.failed.is_empty()
    }
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

async fn save(reminder: &Reminder, ctx: &LembreteContext) -> Result<(), UseCaseError> {
    ctx.repos.reminders.save(reminder).await.map_err(|e| {
        error!("Unable to save reminder: {}. Error: {:?}", reminder.id, e);
        UseCaseError::StorageError
    })
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = DueRemindersReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueReminders";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let mut due = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .filter(|r| r.is_due(now))
            .collect::<Vec<_>>();

        let mut report = DueRemindersReport::default();
        if due.is_empty() {
            return Ok(report);
        }

        let sender = ctx
            .repos
            .settings
            .sender_identity()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        for reminder in due.iter_mut() {
            if reminder.state == ReminderState::Dispatching {
                warn!(
                    "Reminder: {} was left dispatching by an earlier run, dispatching it again",
                    reminder.id
                );
            }
            reminder.begin_dispatch();
            save(reminder, ctx).await?;
        }

        let deliveries = join_all(
            due.iter()
                .map(|reminder| dispatch_reminder(reminder, &sender, ctx)),
        )
        .await;

        let policy = ctx.config.retry_policy;
        for (mut reminder, delivered) in due.into_iter().zip(deliveries) {
            if delivered {
                reminder.mark_sent();
                info!("Reminder sent: {}", reminder.event_title);
            } else {
                reminder.record_failure(now, &policy);
            }
            save(&reminder, ctx).await?;

            match reminder.state {
                ReminderState::Sent => report.sent.push(reminder.id),
                ReminderState::Failed => {
                    error!(
                        "Giving up on reminder: {} after {} attempts",
                        reminder.id, reminder.attempts
                    );
                    report.failed.push(reminder.id)
                }
                _ => report.retrying.push(reminder.id),
            }
        }

        Ok(report)
    }
}
