use super::cleanup_dispatch_ledgers::CleanupDispatchLedgersUseCase;
use crate::notification::NotifyProcessUpdateUseCase;
use crate::shared::usecase::{execute, UseCase};
use futures::future::join_all;
use lembrete_domain::{date::utc_day, DispatchReport, Recipient, ScheduledEvent, ID};
use lembrete_infra::LembreteContext;
use tracing::{error, info, warn};

/// One pass of the calendar check: reminds the client of every event
/// taking place in about 24 hours. An event is reminded at most once a day.
#[derive(Debug)]
pub struct SendEventRemindersUseCase;

#[derive(Debug, Default, PartialEq)]
pub struct EventRemindersReport {
    pub notified: Vec<ID>,
    /// No channel delivered, retried on the next pass while still in the window
    pub failed: Vec<ID>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

async fn notify_client(event: &ScheduledEvent, ctx: &LembreteContext) -> DispatchReport {
    info!("Sending reminder for event: {}", event.title);
    let usecase = NotifyProcessUpdateUseCase {
        recipient: Recipient {
            name: event.client_name.clone(),
            email: event.client_email.clone(),
            phone: event.client_phone.clone(),
        },
        process_number: event.process_number().to_string(),
        update_kind: event.process_update_kind(),
        details: event.reminder_message(),
    };

    match tokio::time::timeout(ctx.config.dispatch_timeout, execute(usecase, ctx)).await {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => match e {},
        Err(_) => {
            warn!("Reminder for event: {} timed out", event.id);
            DispatchReport::default()
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendEventRemindersUseCase {
    type Response = EventRemindersReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendEventReminders";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        // Failing to clean up should not stop today's reminders
        let _ = execute(CleanupDispatchLedgersUseCase, ctx).await;

        let now = ctx.sys.get_timestamp_millis();
        let today = utc_day(now);
        let ledger = ctx
            .repos
            .ledgers
            .find(&today)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let due = ctx
            .repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .filter(|e| e.is_within_reminder_window(now) && !ledger.contains(&e.id))
            .collect::<Vec<_>>();

        let reports = join_all(due.iter().map(|e| notify_client(e, ctx))).await;

        let mut res = EventRemindersReport::default();
        for (event, report) in due.into_iter().zip(reports) {
            if !report.any() {
                warn!("No channel delivered the reminder for event: {}", event.id);
                res.failed.push(event.id);
                continue;
            }
            if let Err(e) = ctx.repos.ledgers.record(&today, &event.id).await {
                error!(
                    "Unable to record the reminder of event: {} as sent. Error: {:?}",
                    event.id, e
                );
                return Err(UseCaseError::StorageError);
            }
            info!("Reminder sent to: {}", event.client_name);
            res.notified.push(event.id);
        }

        Ok(res)
    }
}
