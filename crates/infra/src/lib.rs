mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, FileKVRepo, IEventRepo, IKVRepo, ILedgerRepo, IReminderRepo, ISettingsRepo,
    InMemoryKVRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
use std::time::Duration;
pub use system::{ISys, RealSys};

#[derive(Clone)]
pub struct LembreteContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl LembreteContext {
    /// In memory store and simulated dispatch without latency
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(SimulatedNotifier::new(Duration::from_millis(0))),
        }
    }

    fn create(config: Config) -> anyhow::Result<Self> {
        let repos = match &config.store_path {
            Some(path) => Repos::create_file(path)?,
            None => Repos::create_inmemory(),
        };
        let notifier: Arc<dyn INotifier> = if config.simulate_dispatch {
            Arc::new(SimulatedNotifier::new(config.simulated_dispatch_latency))
        } else {
            Arc::new(HttpNotifier::new(&config, repos.settings.clone()))
        };
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<LembreteContext> {
    LembreteContext::create(Config::new())
}

/// One in memory and one file backed context, the directory holding the
/// file is removed when dropped
#[cfg(test)]
pub(crate) fn setup_test_contexts() -> (tempfile::TempDir, Vec<LembreteContext>) {
    let dir = tempfile::tempdir().expect("To create temp dir");
    let mut file_ctx = LembreteContext::create_inmemory();
    file_ctx.repos =
        Repos::create_file(&dir.path().join("store.json")).expect("To open file store");
    (dir, vec![LembreteContext::create_inmemory(), file_ctx])
}
