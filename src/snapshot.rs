use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use pantry::{ConsumptionLog, InventoryItem, PersistenceReader, PriceLookup, PriceQuote};
use uuid::Uuid;

use crate::error::AppError;

/// JSON-file-backed view onto exported inventory and consumption-log
/// snapshots.
///
/// The real persistence layer lives elsewhere; the CLI works from files it
/// exports. Each file holds a JSON array of items or log entries.
pub struct SnapshotStore {
    items: Vec<InventoryItem>,
    logs: Vec<ConsumptionLog>,
}

impl SnapshotStore {
    pub fn from_files(
        inventory_path: impl AsRef<Path>,
        logs_path: impl AsRef<Path>,
    ) -> Result<Self, AppError> {
        let inventory_raw = std::fs::read_to_string(inventory_path.as_ref()).map_err(|e| {
            AppError::SnapshotError(format!(
                "cannot read {}: {e}",
                inventory_path.as_ref().display()
            ))
        })?;
        let logs_raw = std::fs::read_to_string(logs_path.as_ref()).map_err(|e| {
            AppError::SnapshotError(format!("cannot read {}: {e}", logs_path.as_ref().display()))
        })?;

        Ok(SnapshotStore {
            items: serde_json::from_str(&inventory_raw)?,
            logs: serde_json::from_str(&logs_raw)?,
        })
    }

    /// Owner id to analyze when none was given on the command line: the
    /// first one appearing in the snapshot.
    pub fn default_owner(&self) -> Option<Uuid> {
        self.items
            .first()
            .map(|item| item.user_id)
            .or_else(|| self.logs.first().map(|log| log.user_id))
    }
}

#[async_trait]
impl PersistenceReader for SnapshotStore {
    async fn list_inventory(&self, owner_id: Uuid) -> anyhow::Result<Vec<InventoryItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_consumption_logs(&self, owner_id: Uuid) -> anyhow::Result<Vec<ConsumptionLog>> {
        Ok(self
            .logs
            .iter()
            .filter(|log| log.user_id == owner_id)
            .cloned()
            .collect())
    }
}

/// In-memory price table keyed by lowercased item name.
///
/// Misses fall back to the configured default amount (the engine's own
/// $3.00 fallback only applies when the table returns nothing, which this
/// implementation never does).
pub struct PriceTable {
    prices: HashMap<String, PriceQuote>,
    default_amount: f64,
}

impl PriceTable {
    pub fn with_default(default_amount: f64) -> Self {
        PriceTable {
            prices: HashMap::new(),
            default_amount,
        }
    }

    pub fn from_file(path: impl AsRef<Path>, default_amount: f64) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AppError::SnapshotError(format!("cannot read {}: {e}", path.as_ref().display()))
        })?;
        let table: HashMap<String, PriceQuote> = serde_json::from_str(&raw)?;

        Ok(PriceTable {
            prices: table
                .into_iter()
                .map(|(name, quote)| (name.trim().to_lowercase(), quote))
                .collect(),
            default_amount,
        })
    }
}

#[async_trait]
impl PriceLookup for PriceTable {
    async fn price(&self, item_name: &str) -> Option<PriceQuote> {
        let known = self.prices.get(&item_name.trim().to_lowercase()).cloned();
        Some(known.unwrap_or_else(|| PriceQuote {
            amount: self.default_amount,
            ..PriceQuote::default()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_price_table_case_insensitive_lookup() {
        let mut table = PriceTable::with_default(3.00);
        table.prices.insert(
            "whole milk".to_string(),
            PriceQuote {
                amount: 2.50,
                unit: "liter".to_string(),
                category: "dairy".to_string(),
            },
        );

        let quote = table.price("  Whole Milk ").await.unwrap();
        assert_eq!(quote.amount, 2.50);
    }

    #[tokio::test]
    async fn test_price_table_miss_uses_default_amount() {
        let table = PriceTable::with_default(4.25);
        let quote = table.price("dragonfruit").await.unwrap();
        assert_eq!(quote.amount, 4.25);
        assert_eq!(quote.unit, "item");
    }
}
