mod cleanup_dispatch_ledgers;
mod create_event;
mod delete_event;
mod get_events;
mod send_event_reminders;
mod subscribers;

use actix_web::web;
use create_event::create_event_controller;
use delete_event::delete_event_controller;
use get_events::get_events_controller;
pub use send_event_reminders::SendEventRemindersUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(get_events_controller));
    cfg.route("/events", web::post().to(create_event_controller));
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_controller),
    );
}
