//! Inventory error model.
//!
//! `Display` output is the message shown to the user, so keep it short and
//! free of internal detail.

use thiserror::Error;

/// A candidate product was rejected by `InventoryStore::validate`.
///
/// Variants are listed in the order the checks run; the first failing check
/// wins.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product name must be at least 2 characters")]
    NameTooShort,

    #[error("price must be greater than 0")]
    InvalidPrice,

    #[error("a category must be selected")]
    MissingCategory,

    #[error("quantity cannot be negative")]
    NegativeQuantity,

    #[error("quantity is too large")]
    QuantityTooLarge,

    #[error("a product with that name already exists")]
    DuplicateName,
}

/// A quantity adjustment was rejected. The product is left untouched.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum AdjustError {
    #[error("product not found")]
    NotFound,

    #[error("quantity cannot go below 0")]
    WouldGoNegative,

    #[error("quantity is too large")]
    Overflow,
}

/// A form field could not be parsed into its typed value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("price is not a valid number: {0:?}")]
    Price(String),

    #[error("quantity is not a valid whole number: {0:?}")]
    Quantity(String),
}

/// Persisted text could not be turned back into a product list.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed product list: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON whose contents break a store invariant.
    #[error("corrupt product list: {0}")]
    Corrupt(String),
}

impl CodecError {
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }
}
