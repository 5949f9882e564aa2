mod calendar_event;
mod kv;
mod ledger;
mod reminder;
mod settings;
mod shared;

pub use calendar_event::IEventRepo;
use calendar_event::KVEventRepo;
pub use kv::{FileKVRepo, IKVRepo, InMemoryKVRepo};
pub use ledger::ILedgerRepo;
use ledger::KVLedgerRepo;
pub use reminder::IReminderRepo;
use reminder::KVReminderRepo;
pub use settings::ISettingsRepo;
use settings::KVSettingsRepo;
pub use shared::repo::DeleteResult;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub ledgers: Arc<dyn ILedgerRepo>,
    pub settings: Arc<dyn ISettingsRepo>,
}

impl Repos {
    /// Every repo is a view over the same store
    pub fn from_store(kv: Arc<dyn IKVRepo>) -> Self {
        Self {
            reminders: Arc::new(KVReminderRepo::new(kv.clone())),
            events: Arc::new(KVEventRepo::new(kv.clone())),
            ledgers: Arc::new(KVLedgerRepo::new(kv.clone())),
            settings: Arc::new(KVSettingsRepo::new(kv)),
        }
    }

    pub fn create_file(path: &Path) -> anyhow::Result<Self> {
        info!("Opening store at: {}", path.display());
        let kv = FileKVRepo::open(path)?;
        Ok(Self::from_store(Arc::new(kv)))
    }

    pub fn create_inmemory() -> Self {
        Self::from_store(Arc::new(InMemoryKVRepo::new()))
    }
}
