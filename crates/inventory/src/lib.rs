//! Inventory domain module.
//!
//! Owns the product list, its validation rules and aggregate stats, and
//! persists the list through a [`stockroom_storage::KeyValueStore`]. No
//! rendering lives here.

pub mod codec;
pub mod error;
pub mod price;
pub mod product;
pub mod stats;
pub mod store;

pub use error::{AdjustError, CodecError, FormError, ValidationError};
pub use price::Price;
pub use product::{NewProduct, Product, ProductForm, ValidProduct};
pub use stats::InventoryStats;
pub use stockroom_core::ProductId;
pub use store::{DEFAULT_STORAGE_KEY, InventoryStore};
