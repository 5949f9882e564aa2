mod kv;

pub use kv::KVEventRepo;
use lembrete_domain::{ScheduledEvent, ID};

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, event: &ScheduledEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<ScheduledEvent>>;
    async fn find_all(&self) -> anyhow::Result<Vec<ScheduledEvent>>;
    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<ScheduledEvent>>;
}
