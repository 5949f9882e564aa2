use super::{create_event::CreateEventUseCase, delete_event::DeleteEventUseCase};
use crate::reminder::{CreateAutoReminderUseCase, DeleteEventRemindersUseCase};
use crate::shared::usecase::{execute, Subscriber};
use lembrete_domain::ScheduledEvent;
use lembrete_infra::LembreteContext;

pub struct CreateReminderOnEventCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateEventUseCase> for CreateReminderOnEventCreated {
    async fn notify(&self, e: &ScheduledEvent, ctx: &LembreteContext) {
        let create_reminder = CreateAutoReminderUseCase {
            event_id: e.id.clone(),
            event_title: e.title.clone(),
            event_date: e.date,
            channel: e.reminder_channel,
        };

        // Sideeffect, ignore result
        let _ = execute(create_reminder, ctx).await;
    }
}

pub struct DeleteRemindersOnEventDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteEventUseCase> for DeleteRemindersOnEventDeleted {
    async fn notify(&self, e: &ScheduledEvent, ctx: &LembreteContext) {
        let delete_reminders = DeleteEventRemindersUseCase {
            event_id: e.id.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(delete_reminders, ctx).await;
    }
}
