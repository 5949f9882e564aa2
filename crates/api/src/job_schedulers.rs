use crate::event::SendEventRemindersUseCase;
use crate::reminder::SendDueRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::task::JoinHandle;
use lembrete_infra::LembreteContext;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{error, info};

/// Runs the reminder pass and the calendar event pass on their own
/// cadences from a single task. Both passes run right after start.
pub struct NotificationScheduler;

impl NotificationScheduler {
    pub fn start(ctx: LembreteContext) -> SchedulerHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = actix_web::rt::spawn(run_scheduler(ctx, shutdown_rx));

        SchedulerHandle {
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }
}

/// Keeps the scheduler alive. Dropping it stops the scheduler.
pub struct SchedulerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Signals the scheduler and waits for an ongoing pass to finish
    pub async fn stop(mut self) {
        self.signal_shutdown();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                error!("Notification scheduler exited abnormally: {:?}", e);
            }
        }
    }

    fn signal_shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.signal_shutdown();
    }
}

fn poll_interval(period: Duration) -> Interval {
    let mut interval = interval(period.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn run_scheduler(ctx: LembreteContext, mut shutdown: oneshot::Receiver<()>) {
    let mut reminder_poll = poll_interval(ctx.config.reminder_poll_interval);
    let mut event_poll = poll_interval(ctx.config.event_poll_interval);
    info!(
        reminder_poll_secs = ctx.config.reminder_poll_interval.as_secs(),
        event_poll_secs = ctx.config.event_poll_interval.as_secs(),
        "Notification scheduler started"
    );

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = reminder_poll.tick() => {
                if let Ok(report) = execute(SendDueRemindersUseCase, &ctx).await {
                    if !report.is_empty() {
                        info!(
                            sent = report.sent.len(),
                            retrying = report.retrying.len(),
                            failed = report.failed.len(),
                            "Reminder pass finished"
                        );
                    }
                }
            }
            _ = event_poll.tick() => {
                if let Ok(report) = execute(SendEventRemindersUseCase, &ctx).await {
                    info!(
                        notified = report.notified.len(),
                        failed = report.failed.len(),
                        "Event reminder pass finished"
                    );
                }
            }
        }
    }

    info!("Notification scheduler stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{setup_context, Channel, RecordingNotifier, HOUR, NOW};
    use lembrete_domain::{
        EventKind, Reminder, ReminderChannel, ScheduledEvent, SenderIdentity, ID,
    };

    async fn seed(ctx: &LembreteContext) -> (Reminder, ScheduledEvent) {
        let sender = SenderIdentity {
            name: "Dr. Djair".into(),
            email: Some("djair@example.com".into()),
            phone: None,
        };
        ctx.repos
            .settings
            .save_sender_identity(&sender)
            .await
            .unwrap();

        // Due right away
        let reminder = Reminder::new_auto(
            ID::from("event-1"),
            "Reunião".into(),
            NOW + 24 * HOUR,
            ReminderChannel::Email,
            NOW - HOUR,
        )
        .unwrap();
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let event = ScheduledEvent {
            id: ID::from("event-2"),
            title: "Audiência X".into(),
            date: NOW + 24 * HOUR,
            client_name: "Maria Silva".into(),
            client_email: Some("maria@example.com".into()),
            client_phone: None,
            process_number: None,
            kind: EventKind::Audiencia,
            reminder_channel: ReminderChannel::Email,
            created: NOW - HOUR,
        };
        ctx.repos.events.insert(&event).await.unwrap();

        (reminder, event)
    }

    #[actix_web::main]
    #[test]
    async fn both_passes_run_on_start() {
        let (ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        let (reminder, _) = seed(&ctx).await;

        let handle = NotificationScheduler::start(ctx.clone());
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.stop().await;

        let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap().unwrap();
        assert!(stored.is_sent());
        let recipients = notifier
            .sent_on(Channel::Email)
            .into_iter()
            .map(|n| n.recipient.name)
            .collect::<Vec<_>>();
        assert_eq!(recipients.len(), 2);
        assert!(recipients.contains(&"Dr. Djair".to_string()));
        assert!(recipients.contains(&"Maria Silva".to_string()));
    }

    #[actix_web::main]
    #[test]
    async fn dropping_the_handle_stops_the_scheduler() {
        let (mut ctx, notifier) = setup_context(NOW, RecordingNotifier::new());
        ctx.config.reminder_poll_interval = Duration::from_millis(10);
        ctx.config.event_poll_interval = Duration::from_millis(10);

        let handle = NotificationScheduler::start(ctx.clone());
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(handle);
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Anything seeded after the drop is left alone
        seed(&ctx).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(notifier.sent().is_empty());
    }
}
