use super::document::StoredDocument;
use crate::repos::kv::IKVRepo;
use anyhow::Context;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A list of documents stored as one JSON array under a single key.
///
/// Every mutation reads, modifies and writes back the whole list. Writers
/// in this process are serialized by `write_lock`.
pub struct KVCollection<E, D: StoredDocument<E>> {
    kv: Arc<dyn IKVRepo>,
    key: &'static str,
    write_lock: Mutex<()>,
    _marker: PhantomData<fn() -> (E, D)>,
}

impl<E, D: StoredDocument<E>> KVCollection<E, D> {
    pub fn new(kv: Arc<dyn IKVRepo>, key: &'static str) -> Self {
        Self {
            kv,
            key,
            write_lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    async fn load(&self) -> anyhow::Result<Vec<D>> {
        match self.kv.get(self.key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Malformed value stored under key: {}", self.key)),
            None => Ok(Vec::new()),
        }
    }

    async fn store(&self, docs: &[D]) -> anyhow::Result<()> {
        let raw = serde_json::to_string(docs)?;
        self.kv.set(self.key, &raw).await
    }

    pub async fn find_all(&self) -> anyhow::Result<Vec<E>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .map(D::to_domain)
            .collect())
    }

    pub async fn find_by<F: Fn(&E) -> bool>(&self, compare: F) -> anyhow::Result<Vec<E>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|e| compare(e))
            .collect())
    }

    /// Applies `update` to the whole list and stores the result
    pub async fn update<R, F: FnOnce(&mut Vec<E>) -> R>(&self, update: F) -> anyhow::Result<R> {
        let _guard = self.write_lock.lock().await;
        let mut entities = self.find_all().await?;
        let res = update(&mut entities);
        let docs = entities.iter().map(D::from_domain).collect::<Vec<_>>();
        self.store(&docs).await?;
        Ok(res)
    }
}
