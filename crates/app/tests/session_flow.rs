use std::time::Duration;

use stockroom_app::{AppConfig, MessageKind, bootstrap};
use stockroom_inventory::{InventoryStats, ProductForm};
use stockroom_observability::LogFormat;
use stockroom_storage::KeyValueStore;

fn config_for(dir: &std::path::Path) -> AppConfig {
    AppConfig {
        storage_key: "products".to_string(),
        data_dir: Some(dir.to_path_buf()),
        message_ttl: Duration::from_secs(5),
        log_format: LogFormat::Json,
    }
}

fn form(name: &str, price: &str, category: &str, quantity: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        price: price.to_string(),
        category: category.to_string(),
        quantity: quantity.to_string(),
        description: String::new(),
    }
}

#[test]
fn session_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let (pen_id, mug_id) = {
        let mut session = bootstrap(&config).unwrap();
        let pen = session.submit_new_product(&form("Pen", "1.50", "Office", "10")).unwrap();
        let mug = session.submit_new_product(&form("Mug", "8", "Kitchen", "2")).unwrap();
        session.increment_quantity(pen.id_typed()).unwrap();
        (pen.id_typed(), mug.id_typed())
    };

    let mut session = bootstrap(&config).unwrap();
    let store = session.store();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(pen_id).unwrap().quantity(), 11);
    assert_eq!(store.stats(), InventoryStats {
        count: 2,
        total_quantity: 13,
        total_value: 11 * 150 + 2 * 800,
    });

    assert!(session.delete_product(mug_id));
    assert!(session.view().html().contains("Product deleted"));
    assert!(!session.view().html().contains("Mug"));

    let persisted = session.store().storage().get("products").unwrap().unwrap();
    let on_disk: serde_json::Value = serde_json::from_str(&persisted).unwrap();
    assert_eq!(on_disk.as_array().map(Vec::len), Some(1));
    assert_eq!(on_disk[0]["name"], "Pen");
    assert_eq!(on_disk[0]["priceCents"], 150);
}

#[test]
fn corrupt_file_starts_an_empty_usable_session() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("products.json"), "[{\"oops\":").unwrap();

    let mut session = bootstrap(&config_for(dir.path())).unwrap();
    assert!(session.store().is_empty());
    assert!(session.view().html().contains("empty-state"));

    session.submit_new_product(&form("Pen", "1.50", "Office", "10")).unwrap();
    assert_eq!(session.status().map(|m| m.kind), Some(MessageKind::Success));
    assert!(session.view().html().contains("<span id=\"totalValue\">$15.00</span>"));
}

#[test]
fn validation_errors_reach_the_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = bootstrap(&config_for(dir.path())).unwrap();

    assert!(session.submit_new_product(&form("A", "0", "Office", "1")).is_err());
    let html = session.view().html();
    assert!(html.contains("<div class=\"error-message\">product name must be at least 2 characters</div>"));
    assert!(session.store().is_empty());
    assert!(!dir.path().join("products.json").exists());
}
