mod error;
mod event;
mod job_schedulers;
mod notification;
mod reminder;
mod settings;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
pub use job_schedulers::{NotificationScheduler, SchedulerHandle};
use lembrete_infra::LembreteContext;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    event::configure_routes(cfg);
    notification::configure_routes(cfg);
    reminder::configure_routes(cfg);
    settings::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    scheduler: SchedulerHandle,
}

impl Application {
    pub async fn new(context: LembreteContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        let scheduler = NotificationScheduler::start(context);

        Ok(Self {
            server,
            port,
            scheduler,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: LembreteContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    /// Serves until the server shuts down, then stops the scheduler
    pub async fn start(self) -> Result<(), std::io::Error> {
        info!("Listening on port: {}", self.port);
        let res = self.server.await;
        self.scheduler.stop().await;
        res
    }
}
