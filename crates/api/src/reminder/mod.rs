mod create_auto_reminder;
mod delete_event_reminders;
mod delete_reminder;
mod dispatch;
mod get_pending_reminders;
mod get_reminders;
mod get_upcoming_reminders;
mod send_due_reminders;
mod send_reminder_now;

use actix_web::web;
pub use create_auto_reminder::CreateAutoReminderUseCase;
use create_auto_reminder::create_auto_reminder_controller;
use delete_event_reminders::delete_event_reminders_controller;
pub use delete_event_reminders::DeleteEventRemindersUseCase;
use delete_reminder::delete_reminder_controller;
use get_pending_reminders::get_pending_reminders_controller;
use get_reminders::get_reminders_controller;
use get_upcoming_reminders::get_upcoming_reminders_controller;
pub use send_due_reminders::SendDueRemindersUseCase;
use send_reminder_now::send_reminder_now_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route("/reminders", web::post().to(create_auto_reminder_controller));
    cfg.route(
        "/reminders/pending",
        web::get().to(get_pending_reminders_controller),
    );
    cfg.route(
        "/reminders/upcoming",
        web::get().to(get_upcoming_reminders_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/send",
        web::post().to(send_reminder_now_controller),
    );
    cfg.route(
        "/events/{event_id}/reminders",
        web::delete().to(delete_event_reminders_controller),
    );
}
