use crate::shared::usecase::UseCase;
use lembrete_domain::is_ledger_expired;
use lembrete_infra::LembreteContext;
use tracing::info;

/// Removes the dispatch ledgers of days older than the retention period.
/// Responds with the store keys that were removed.
#[derive(Debug)]
pub struct CleanupDispatchLedgersUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CleanupDispatchLedgersUseCase {
    type Response = Vec<String>;

    type Error = UseCaseError;

    const NAME: &'static str = "CleanupDispatchLedgers";

    async fn execute(&mut self, ctx: &LembreteContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let days = ctx
            .repos
            .ledgers
            .find_days()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut removed = Vec::new();
        for day in days
            .into_iter()
            .filter(|day| is_ledger_expired(day, now, ctx.config.ledger_retention_days))
        {
            ctx.repos
                .ledgers
                .delete(&day)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            let key = lembrete_domain::ledger_key(&day);
            info!("Removed old dispatch ledger: {}", key);
            removed.push(key);
        }

        Ok(removed)
    }
}
