mod notify_process_update;
mod send_notification;

use actix_web::web;
use futures::future::OptionFuture;
use lembrete_domain::{DispatchReport, Notification};
use lembrete_infra::LembreteContext;
use notify_process_update::notify_process_update_controller;
pub use notify_process_update::NotifyProcessUpdateUseCase;
use send_notification::send_notification_controller;

/// Sends the notification through the selected channels concurrently
pub(crate) async fn fan_out(
    notification: &Notification,
    email: bool,
    whatsapp: bool,
    ctx: &LembreteContext,
) -> DispatchReport {
    let email: OptionFuture<_> = email
        .then(|| ctx.notifier.send_email(notification))
        .into();
    let whatsapp: OptionFuture<_> = whatsapp
        .then(|| ctx.notifier.send_whatsapp(notification))
        .into();
    let (email, whatsapp) = futures::join!(email, whatsapp);

    DispatchReport {
        email: email.unwrap_or(false),
        whatsapp: whatsapp.unwrap_or(false),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications",
        web::post().to(send_notification_controller),
    );
    cfg.route(
        "/notifications/process-update",
        web::post().to(notify_process_update_controller),
    );
}
