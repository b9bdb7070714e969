use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId};

use crate::error::{FormError, ValidationError};
use crate::price::{Price, parse_cents};

/// Minimum product name length, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Largest quantity a product may hold. Keeps every stats total exact.
pub const MAX_QUANTITY: u64 = u32::MAX as u64;

/// A product held by the inventory.
///
/// Only the store creates products (from a `ValidProduct`) and only the store
/// changes their quantity, so a `Product` always satisfies the data-model
/// invariants except cross-product uniqueness, which the store owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(rename = "priceCents")]
    price: Price,
    category: String,
    quantity: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Product {
    pub(crate) fn create(id: ProductId, valid: ValidProduct, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: valid.name,
            price: valid.price,
            category: valid.category,
            quantity: valid.quantity,
            description: valid.description,
            created_at,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `price × quantity`, in cents. Below 2^96 since quantity ≤ `MAX_QUANTITY`.
    pub fn line_value(&self) -> u128 {
        u128::from(self.price.cents()) * u128::from(self.quantity)
    }

    /// Case-insensitive name comparison used for uniqueness, ignoring
    /// surrounding whitespace on both sides.
    pub fn has_name(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }
}

/// Normalized form two names are compared by.
pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A request to add a product, with typed but not yet validated fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    /// Price in cents; may be zero or negative until validated.
    pub price_cents: i64,
    pub category: String,
    /// May be negative until validated.
    pub quantity: i64,
    pub description: Option<String>,
}

impl NewProduct {
    /// Checks 1-4 of validation (everything that does not need the store).
    pub(crate) fn check_fields(&self) -> Result<ValidProduct, ValidationError> {
        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort);
        }

        let price = Price::from_cents(self.price_cents).ok_or(ValidationError::InvalidPrice)?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        let quantity =
            u64::try_from(self.quantity).map_err(|_| ValidationError::NegativeQuantity)?;
        if quantity > MAX_QUANTITY {
            return Err(ValidationError::QuantityTooLarge);
        }

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(ValidProduct {
            name: name.to_string(),
            price,
            category: category.to_string(),
            quantity,
            description,
        })
    }
}

/// A candidate that passed validation against a specific store state.
///
/// Text fields are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    name: String,
    price: Price,
    category: String,
    quantity: u64,
    description: Option<String>,
}

impl ValidProduct {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Raw text of the "add product" form, one field per input element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub quantity: String,
    #[serde(default)]
    pub description: String,
}

impl ProductForm {
    /// Parse the numeric fields and trim the text ones.
    ///
    /// Business rules (minimum name length, positive price...) are left to
    /// `InventoryStore::validate`.
    pub fn parse(&self) -> Result<NewProduct, FormError> {
        let price_cents =
            parse_cents(&self.price).ok_or_else(|| FormError::Price(self.price.clone()))?;
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::Quantity(self.quantity.clone()))?;

        let description = self.description.trim();
        Ok(NewProduct {
            name: self.name.trim().to_string(),
            price_cents,
            category: self.category.trim().to_string(),
            quantity,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}
