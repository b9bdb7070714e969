//! Turns UI commands into store operations and keeps the view current.

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use stockroom_core::ProductId;
use stockroom_inventory::{AdjustError, FormError, InventoryStore, Product, ProductForm, ValidationError};
use stockroom_storage::KeyValueStore;

use crate::feedback::StatusMessage;
use crate::view::{InventoryView, Snapshot};

pub const PRODUCT_ADDED: &str = "Product added successfully";
pub const PRODUCT_DELETED: &str = "Product deleted";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Why a submitted form did not produce a product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Owns the store for the session and re-renders the view after each command.
///
/// Commands never fail the session: rejected input surfaces as an error
/// status message and the returned `Err`/`false`.
#[derive(Debug)]
pub struct InventoryController<S, V> {
    store: InventoryStore<S>,
    view: V,
    message_ttl: Duration,
    message: Option<StatusMessage>,
}

impl<S, V> InventoryController<S, V>
where
    S: KeyValueStore,
    V: InventoryView,
{
    /// Wire a hydrated store to a view and draw the initial state.
    pub fn new(store: InventoryStore<S>, view: V, message_ttl: Duration) -> Self {
        let mut controller = Self {
            store,
            view,
            message_ttl,
            message: None,
        };
        controller.refresh();
        controller
    }

    pub fn store(&self) -> &InventoryStore<S> {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Parse, validate and add the product described by `form`.
    pub fn submit_new_product(&mut self, form: &ProductForm) -> Result<Product, SubmitError> {
        let result = form
            .parse()
            .map_err(SubmitError::from)
            .and_then(|candidate| self.store.add(candidate).map_err(SubmitError::from));

        match &result {
            Ok(_) => self.flash(StatusMessage::success(PRODUCT_ADDED, Utc::now(), self.message_ttl)),
            Err(err) => {
                tracing::debug!(error = %err, "product submission rejected");
                self.flash(StatusMessage::error(err.to_string(), Utc::now(), self.message_ttl));
            }
        }

        self.refresh();
        result
    }

    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let removed = self.store.delete(id);

        let message = if removed {
            StatusMessage::success(PRODUCT_DELETED, Utc::now(), self.message_ttl)
        } else {
            tracing::debug!(product_id = %id, "delete of unknown product ignored");
            StatusMessage::error(PRODUCT_NOT_FOUND, Utc::now(), self.message_ttl)
        };
        self.flash(message);

        self.refresh();
        removed
    }

    pub fn increment_quantity(&mut self, id: ProductId) -> Result<Product, AdjustError> {
        self.adjust(id, 1)
    }

    pub fn decrement_quantity(&mut self, id: ProductId) -> Result<Product, AdjustError> {
        self.adjust(id, -1)
    }

    /// The status message, if still visible at `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> Option<&StatusMessage> {
        self.message.as_ref().filter(|m| m.is_visible_at(now))
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status_at(Utc::now())
    }

    pub fn dismiss_message(&mut self) {
        if self.message.take().is_some() {
            self.refresh();
        }
    }

    /// Re-render with current state. Call when the message timer fires.
    pub fn refresh(&mut self) {
        let now = Utc::now();
        if self.message.as_ref().is_some_and(|m| !m.is_visible_at(now)) {
            self.message = None;
        }

        let snapshot = Snapshot {
            products: self.store.products(),
            stats: self.store.stats(),
            message: self.message.as_ref(),
        };
        self.view.render(&snapshot);
    }

    fn adjust(&mut self, id: ProductId, delta: i64) -> Result<Product, AdjustError> {
        let result = self.store.adjust_quantity(id, delta);

        if let Err(err) = &result {
            tracing::debug!(product_id = %id, delta, error = %err, "quantity adjustment rejected");
            self.flash(StatusMessage::error(err.to_string(), Utc::now(), self.message_ttl));
        }

        self.refresh();
        result
    }

    /// Replace any current message.
    fn flash(&mut self, message: StatusMessage) {
        self.message = Some(message);
    }
}
