mod file;
mod inmemory;

pub use file::FileKVRepo;
pub use inmemory::InMemoryKVRepo;

/// String keyed, string valued store. It is the only durable state of the
/// service, every other repo is a typed view over it.
#[async_trait::async_trait]
pub trait IKVRepo: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    /// Deleting a missing key is not an error
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
    async fn keys(&self) -> anyhow::Result<Vec<String>>;
}
