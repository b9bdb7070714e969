use chrono::{DateTime, Utc};

use stockroom_core::ProductId;
use stockroom_storage::KeyValueStore;

use crate::codec;
use crate::error::{AdjustError, CodecError, ValidationError};
use crate::product::{MAX_QUANTITY, NewProduct, Product, ValidProduct};
use crate::stats::InventoryStats;

/// Default key the product list is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "products";

/// Owns the product list and keeps it in sync with a key/value backend.
///
/// Every successful mutation writes the full list back under `key`. A failed
/// write is logged and otherwise ignored: the in-memory state stays
/// authoritative for the rest of the session.
#[derive(Debug)]
pub struct InventoryStore<S> {
    storage: S,
    key: String,
    products: Vec<Product>,
}

impl<S: KeyValueStore> InventoryStore<S> {
    /// Open a store, hydrating from whatever `storage` holds under `key`.
    ///
    /// Missing, unreadable, or corrupt state all yield an empty store.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let products = match storage.get(&key) {
            Ok(Some(text)) => codec::deserialize(&text),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "failed to read persisted inventory");
                Vec::new()
            }
        };
        tracing::debug!(key = %key, count = products.len(), "inventory hydrated");

        Self {
            storage,
            key,
            products,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Products in insertion (display) order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Check a candidate against the field rules and the current contents.
    pub fn validate(&self, candidate: &NewProduct) -> Result<ValidProduct, ValidationError> {
        let valid = candidate.check_fields()?;
        if self.products.iter().any(|p| p.has_name(valid.name())) {
            return Err(ValidationError::DuplicateName);
        }
        Ok(valid)
    }

    /// Validate and append a new product, stamped with the current time.
    pub fn add(&mut self, candidate: NewProduct) -> Result<Product, ValidationError> {
        self.add_at(candidate, Utc::now())
    }

    /// Like [`add`](Self::add) with an explicit creation timestamp.
    pub fn add_at(
        &mut self,
        candidate: NewProduct,
        created_at: DateTime<Utc>,
    ) -> Result<Product, ValidationError> {
        let valid = self.validate(&candidate)?;
        let product = Product::create(ProductId::new(), valid, created_at);

        self.products.push(product.clone());
        self.persist();
        tracing::info!(product_id = %product.id_typed(), name = product.name(), "product added");

        Ok(product)
    }

    /// Remove a product. Returns `false` (and writes nothing) if `id` is unknown.
    pub fn delete(&mut self, id: ProductId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let removed = self.products.remove(index);
        self.persist();
        tracing::info!(product_id = %id, name = removed.name(), "product deleted");
        true
    }

    /// Add `delta` to a product's quantity.
    ///
    /// A result below zero is rejected outright, never clamped, and leaves the
    /// quantity unchanged. So is a result above `MAX_QUANTITY`.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> Result<Product, AdjustError> {
        let index = self.position(id).ok_or(AdjustError::NotFound)?;
        let current = self.products[index].quantity();

        let next = match current.checked_add_signed(delta) {
            Some(next) if next <= MAX_QUANTITY => next,
            None if delta < 0 => return Err(AdjustError::WouldGoNegative),
            _ => return Err(AdjustError::Overflow),
        };

        let product = &mut self.products[index];
        product.set_quantity(next);
        let updated = product.clone();

        self.persist();
        tracing::info!(product_id = %id, from = current, to = next, "quantity adjusted");

        Ok(updated)
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_products(&self.products)
    }

    /// Encode the full product list in the persisted format.
    pub fn serialize(&self) -> Result<String, CodecError> {
        codec::encode(&self.products)
    }

    /// Lenient decode of persisted text; see [`codec::deserialize`].
    pub fn deserialize(text: &str) -> Vec<Product> {
        codec::deserialize(text)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id_typed() == id)
    }

    fn persist(&self) {
        let text = match self.serialize() {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(key = %self.key, error = %err, "failed to encode inventory");
                return;
            }
        };

        if let Err(err) = self.storage.set(&self.key, &text) {
            tracing::error!(key = %self.key, error = %err, "failed to persist inventory");
        }
    }
}
