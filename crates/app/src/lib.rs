//! `stockroom-app`
//!
//! **Responsibility:** session wiring for the inventory widget.
//!
//! This crate provides:
//! - Environment-driven configuration
//! - The controller that maps UI commands onto the inventory store
//! - Transient status messages
//! - An HTML view

pub mod config;
pub mod controller;
pub mod feedback;
pub mod html;
pub mod view;

pub use config::AppConfig;
pub use controller::{InventoryController, SubmitError};
pub use feedback::{MessageKind, StatusMessage};
pub use html::HtmlView;
pub use view::{InventoryView, Snapshot};

use anyhow::Context;
use stockroom_inventory::InventoryStore;

/// Start a session backed by files under the configured data directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn bootstrap(
    config: &AppConfig,
) -> anyhow::Result<InventoryController<stockroom_storage::FileKeyValueStore, HtmlView>> {
    stockroom_observability::init_with(config.log_format);

    let dir = config.resolve_data_dir()?;
    let storage = stockroom_storage::FileKeyValueStore::open(&dir)
        .with_context(|| format!("failed to open data directory at {:?}", dir))?;
    tracing::info!(dir = %dir.display(), key = %config.storage_key, "inventory session starting");

    let store = InventoryStore::open(storage, config.storage_key.clone());
    Ok(InventoryController::new(store, HtmlView::new(), config.message_ttl))
}

/// Start a session backed by the page's `localStorage`.
#[cfg(target_arch = "wasm32")]
pub fn bootstrap(
    config: &AppConfig,
) -> anyhow::Result<InventoryController<stockroom_storage::LocalStorage, HtmlView>> {
    stockroom_observability::init_with(config.log_format);

    let storage = stockroom_storage::LocalStorage::open().context("failed to open localStorage")?;
    tracing::info!(key = %config.storage_key, "inventory session starting");

    let store = InventoryStore::open(storage, config.storage_key.clone());
    Ok(InventoryController::new(store, HtmlView::new(), config.message_ttl))
}
