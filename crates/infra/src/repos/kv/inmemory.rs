use super::IKVRepo;
use std::collections::BTreeMap;
use std::sync::Mutex;

pub struct InMemoryKVRepo {
    values: Mutex<BTreeMap<String, String>>,
}

impl InMemoryKVRepo {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(BTreeMap::new()),
        }
    }

    fn values(&self) -> anyhow::Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| anyhow::Error::msg("In memory key value store lock is poisoned"))
    }
}

impl Default for InMemoryKVRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IKVRepo for InMemoryKVRepo {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.values()?.remove(key);
        Ok(())
    }

    async fn keys(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.values()?.keys().cloned().collect())
    }
}
