use chrono::{DateTime, Utc};
use pantry::PersistenceReader;
use pantrysense::snapshot::{PriceTable, SnapshotStore};
use temp_dir::TempDir;
use uuid::Uuid;
use waste_analysis::WasteAnalyzer;

fn reference() -> DateTime<Utc> {
    "2025-01-15T12:00:00Z".parse().unwrap()
}

fn write_snapshots(dir: &TempDir, owner: Uuid) -> (String, String) {
    let inventory = serde_json::json!([
        {
            "id": Uuid::new_v4(),
            "userId": owner,
            "name": "chicken breast",
            "category": "protein",
            "quantity": 1.0,
            "expirationDate": "2025-01-13T12:00:00Z"
        },
        {
            "id": Uuid::new_v4(),
            "userId": owner,
            "name": "spinach",
            "category": "vegetable",
            "quantity": 2.0,
            "expirationDate": "2025-01-17T12:00:00Z"
        },
        {
            "id": Uuid::new_v4(),
            "userId": owner,
            "name": "pickled something",
            "category": "mystery",
            "quantity": 1.0,
            "expirationDate": "2025-03-01T00:00:00Z"
        }
    ]);
    let logs = serde_json::json!([
        {
            "id": Uuid::new_v4(),
            "userId": owner,
            "itemName": "spinach salad",
            "category": "vegetable",
            "quantity": 1.0,
            "consumedAt": "2025-01-10T18:00:00Z"
        }
    ]);

    let inventory_path = dir.child("inventory.json");
    let logs_path = dir.child("logs.json");
    std::fs::write(&inventory_path, inventory.to_string()).unwrap();
    std::fs::write(&logs_path, logs.to_string()).unwrap();

    (
        inventory_path.to_string_lossy().into_owned(),
        logs_path.to_string_lossy().into_owned(),
    )
}

#[tokio::test]
async fn test_analysis_from_snapshot_files() {
    let dir = TempDir::new().unwrap();
    let owner = Uuid::new_v4();
    let (inventory_path, logs_path) = write_snapshots(&dir, owner);

    let store = SnapshotStore::from_files(&inventory_path, &logs_path).unwrap();
    assert_eq!(store.default_owner(), Some(owner));

    let prices = PriceTable::with_default(3.00);
    let report = WasteAnalyzer::new()
        .analyze(owner, &store, &prices, reference())
        .await
        .unwrap();

    assert_eq!(report.risk_assessments.len(), 3);
    // Expired chicken in winter: the documented 72/high case
    assert_eq!(report.risk_assessments[0].risk_score, 72);
    assert_eq!(report.weekly_waste.actual.grams, 300);
}

#[tokio::test]
async fn test_unknown_category_resolves_to_other() {
    let dir = TempDir::new().unwrap();
    let owner = Uuid::new_v4();
    let (inventory_path, logs_path) = write_snapshots(&dir, owner);

    let store = SnapshotStore::from_files(&inventory_path, &logs_path).unwrap();
    let items = store.list_inventory(owner).await.unwrap();

    let pickled = items
        .iter()
        .find(|item| item.name == "pickled something")
        .unwrap();
    assert_eq!(pickled.category, pantry::FoodCategory::Other);
}

#[tokio::test]
async fn test_price_table_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let table_path = dir.child("prices.json");
    std::fs::write(
        &table_path,
        serde_json::json!({
            "Chicken Breast": { "amount": 5.50, "unit": "lb", "category": "protein" }
        })
        .to_string(),
    )
    .unwrap();

    let table = PriceTable::from_file(&table_path, 3.00).unwrap();

    let owner = Uuid::new_v4();
    let (inventory_path, logs_path) = write_snapshots(&dir, owner);
    let store = SnapshotStore::from_files(&inventory_path, &logs_path).unwrap();

    let report = WasteAnalyzer::new()
        .analyze(owner, &store, &table, reference())
        .await
        .unwrap();

    // 1 unit of expired chicken at the table price, not the default
    assert_eq!(report.weekly_waste.actual.money, 5.50);
}

#[tokio::test]
async fn test_missing_snapshot_file_is_an_error() {
    let result = SnapshotStore::from_files("/nonexistent/inventory.json", "/nonexistent/logs.json");
    assert!(result.is_err());
}
