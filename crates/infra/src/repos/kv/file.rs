use super::IKVRepo;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::info;

/// Key value store persisted as a single JSON object on disk.
///
/// Every write rewrites the whole file through a temporary file and a
/// rename, so a crash leaves either the old or the new content behind.
/// Only one process may use a given file.
pub struct FileKVRepo {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileKVRepo {
    pub fn open<P: Into<PathBuf>>(path: P) -> anyhow::Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Unable to read store file: {}", path.display()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Malformed store file: {}", path.display()))?
            }
        } else {
            info!("Store file {} does not exist, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    async fn persist(&self, values: &BTreeMap<String, String>) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(values)?;
        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("Unable to write store file: {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("Unable to replace store file: {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl IKVRepo for FileKVRepo {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self.values.lock().await;
        let mut updated = values.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated).await?;
        *values = updated;
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        let mut values = self.values.lock().await;
        if !values.contains_key(key) {
            return Ok(());
        }
        let mut updated = values.clone();
        updated.remove(key);
        self.persist(&updated).await?;
        *values = updated;
        Ok(())
    }

    async fn keys(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.values.lock().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileKVRepo::open(&path).unwrap();
        store.set("reminders", "[]").await.unwrap();
        store.set("advogado_name", "Dr. Djair Rota").await.unwrap();
        store.delete("reminders").await.unwrap();
        drop(store);

        let store = FileKVRepo::open(&path).unwrap();
        assert_eq!(
            store.get("advogado_name").await.unwrap(),
            Some("Dr. Djair Rota".to_string())
        );
        assert!(store.get("reminders").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failed_write_leaves_values_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileKVRepo::open(&path).unwrap();
        store.set("advogado_name", "Dr. Djair Rota").await.unwrap();

        // The store can no longer write its file
        let missing = FileKVRepo {
            path: dir.path().join("missing_dir").join("store.json"),
            values: Mutex::new(store.values.lock().await.clone()),
        };
        assert!(missing.set("reminders", "[1]").await.is_err());
        assert!(missing.get("reminders").await.unwrap().is_none());
        assert!(missing.delete("advogado_name").await.is_err());
        assert_eq!(
            missing.get("advogado_name").await.unwrap(),
            Some("Dr. Djair Rota".to_string())
        );
    }

    #[test]
    fn rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(FileKVRepo::open(&path).is_err());
    }
}
