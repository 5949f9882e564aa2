use lembrete_api::Application;
use lembrete_infra::{Config, LembreteContext};
use lembrete_sdk::LembreteSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, LembreteSDK, String) {
    let mut ctx = LembreteContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = LembreteSDK::new(address.clone());
    (app, sdk, address)
}
