mod notification_config;
mod notification_time;
mod sender_identity;
mod whatsapp_config;

use actix_web::web;
use notification_config::{get_notification_config_controller, save_notification_config_controller};
use notification_time::{get_notification_time_controller, set_notification_time_controller};
use sender_identity::{get_sender_identity_controller, save_sender_identity_controller};
use whatsapp_config::{get_whatsapp_config_controller, save_whatsapp_config_controller};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/settings/notification-time",
        web::get().to(get_notification_time_controller),
    );
    cfg.route(
        "/settings/notification-time",
        web::put().to(set_notification_time_controller),
    );
    cfg.route(
        "/settings/notifications",
        web::get().to(get_notification_config_controller),
    );
    cfg.route(
        "/settings/notifications",
        web::put().to(save_notification_config_controller),
    );
    cfg.route(
        "/settings/whatsapp",
        web::get().to(get_whatsapp_config_controller),
    );
    cfg.route(
        "/settings/whatsapp",
        web::put().to(save_whatsapp_config_controller),
    );
    cfg.route(
        "/settings/sender",
        web::get().to(get_sender_identity_controller),
    );
    cfg.route(
        "/settings/sender",
        web::put().to(save_sender_identity_controller),
    );
}
