use super::ILedgerRepo;
use crate::repos::kv::IKVRepo;
use crate::repos::shared::document::lenient_id;
use anyhow::Context;
use chrono::NaiveDate;
use lembrete_domain::{ledger_key, parse_ledger_key, DailyDispatchLedger, ID};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Every ledger is a JSON array of event ids stored under
/// `reminders_sent_<YYYY-MM-DD>`
pub struct KVLedgerRepo {
    kv: Arc<dyn IKVRepo>,
    write_lock: Mutex<()>,
}

impl KVLedgerRepo {
    pub fn new(kv: Arc<dyn IKVRepo>) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    async fn store(&self, ledger: &DailyDispatchLedger) -> anyhow::Result<()> {
        let raw = serde_json::to_string(ledger.event_ids())?;
        self.kv.set(&ledger.key(), &raw).await
    }
}

#[derive(Deserialize)]
#[serde(transparent)]
struct LedgerRaw(#[serde(deserialize_with = "lenient_id::vec::deserialize")] Vec<ID>);

#[async_trait::async_trait]
impl ILedgerRepo for KVLedgerRepo {
    async fn find(&self, day: &NaiveDate) -> anyhow::Result<DailyDispatchLedger> {
        let key = ledger_key(day);
        let event_ids = match self.kv.get(&key).await? {
            Some(raw) => {
                serde_json::from_str::<LedgerRaw>(&raw)
                    .with_context(|| format!("Malformed value stored under key: {}", key))?
                    .0
            }
            None => Vec::new(),
        };
        Ok(DailyDispatchLedger::with_event_ids(*day, event_ids))
    }

    async fn save(&self, ledger: &DailyDispatchLedger) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        self.store(ledger).await
    }

    async fn record(&self, day: &NaiveDate, event_id: &ID) -> anyhow::Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut ledger = self.find(day).await?;
        if !ledger.record(event_id.clone()) {
            return Ok(false);
        }
        self.store(&ledger).await?;
        Ok(true)
    }

    async fn find_days(&self) -> anyhow::Result<Vec<NaiveDate>> {
        Ok(self
            .kv
            .keys()
            .await?
            .iter()
            .filter_map(|key| parse_ledger_key(key))
            .collect())
    }

    async fn delete(&self, day: &NaiveDate) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        self.kv.delete(&ledger_key(day)).await
    }
}
