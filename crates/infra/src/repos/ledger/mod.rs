mod kv;

pub use kv::KVLedgerRepo;
use chrono::NaiveDate;
use lembrete_domain::{DailyDispatchLedger, ID};

#[async_trait::async_trait]
pub trait ILedgerRepo: Send + Sync {
    /// An empty ledger when nothing has been recorded that day
    async fn find(&self, day: &NaiveDate) -> anyhow::Result<DailyDispatchLedger>;
    async fn save(&self, ledger: &DailyDispatchLedger) -> anyhow::Result<()>;
    /// Adds the event to the ledger of the day. Returns false if it was
    /// already there.
    async fn record(&self, day: &NaiveDate, event_id: &ID) -> anyhow::Result<bool>;
    /// Days that have a stored ledger
    async fn find_days(&self) -> anyhow::Result<Vec<NaiveDate>>;
    async fn delete(&self, day: &NaiveDate) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::setup_test_contexts;
    use lembrete_domain::date::utc_day;
    use lembrete_domain::{DailyDispatchLedger, ID};

    #[tokio::test]
    async fn test_ledger_queries() {
        let (_dir, contexts) = setup_test_contexts();
        for ctx in contexts {
            let ledgers = ctx.repos.ledgers;
            let today = utc_day(1734267600000);
            let yesterday = utc_day(1734267600000 - 1000 * 60 * 60 * 24);

            assert!(ledgers.find(&today).await.unwrap().event_ids().is_empty());
            assert!(ledgers.record(&today, &ID::from("1")).await.unwrap());
            assert!(!ledgers.record(&today, &ID::from("1")).await.unwrap());
            assert!(ledgers.record(&today, &ID::from("2")).await.unwrap());
            assert!(ledgers
                .save(&DailyDispatchLedger::with_event_ids(
                    yesterday,
                    vec![ID::from("1")]
                ))
                .await
                .is_ok());

            let ledger = ledgers.find(&today).await.unwrap();
            assert_eq!(ledger.event_ids(), &[ID::from("1"), ID::from("2")]);

            let mut days = ledgers.find_days().await.unwrap();
            days.sort();
            assert_eq!(days, vec![yesterday, today]);

            assert!(ledgers.delete(&yesterday).await.is_ok());
            assert_eq!(ledgers.find_days().await.unwrap(), vec![today]);
        }
    }
}
