use async_trait::async_trait;
use uuid::Uuid;

use crate::{ConsumptionLog, InventoryItem};

/// Read-only view onto the persistence collaborator.
///
/// Implementations are expected to apply owner-id filtering themselves; the
/// analysis engine treats the returned collections as already scoped to one
/// household. An unreadable snapshot is the one genuinely fatal failure in
/// the whole pipeline, and it is signalled here, before any scoring runs.
#[async_trait]
pub trait PersistenceReader: Send + Sync {
    async fn list_inventory(&self, owner_id: Uuid) -> anyhow::Result<Vec<InventoryItem>>;

    async fn list_consumption_logs(&self, owner_id: Uuid) -> anyhow::Result<Vec<ConsumptionLog>>;
}
