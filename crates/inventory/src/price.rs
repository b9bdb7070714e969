//! Price value object.

use serde::{Deserialize, Serialize};
use stockroom_core::ValueObject;

/// Strictly positive price in the smallest currency unit (cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    /// `None` unless `cents > 0`.
    pub fn from_cents(cents: i64) -> Option<Self> {
        u64::try_from(cents).ok().filter(|c| *c > 0).map(Self)
    }

    pub fn cents(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Price {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err("price must be greater than 0".to_string());
        }
        Ok(Self(value))
    }
}

impl From<Price> for u64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&format_cents(u128::from(self.0)))
    }
}

/// Parse decimal text ("1.5", "12", "0.99") into cents, rounding to the
/// nearest cent. Returns `None` for text that is not a finite number or does
/// not fit the cent range.
pub fn parse_cents(text: &str) -> Option<i64> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let cents = (value * 100.0).round();
    if cents.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(cents as i64)
}

/// Render cents with exactly two decimals: `1500` -> `"15.00"`.
pub fn format_cents(cents: u128) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
