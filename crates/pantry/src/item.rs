use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::FoodCategory;

/// A single item sitting in a household's inventory.
///
/// Owned by the persistence collaborator; the analysis engine only ever
/// reads snapshots of these. `expiration_date` is required for scoring but
/// may be absent in a snapshot (OCR ingestion does not always capture it),
/// in which case the item is skipped and flagged rather than failing the
/// whole computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub quantity: f64,
    #[serde(default)]
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One consumption event. Append-mostly; never mutated by the analysis
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item_name: String,
    pub category: FoodCategory,
    pub quantity: f64,
    pub consumed_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}
