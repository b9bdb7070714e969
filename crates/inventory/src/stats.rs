use serde::{Deserialize, Serialize};

use crate::price::format_cents;
use crate::product::Product;

/// Aggregate figures shown next to the product list.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub count: usize,
    pub total_quantity: u128,
    /// Σ price × quantity, in cents.
    pub total_value: u128,
}

impl InventoryStats {
    /// Recompute from scratch. Never cached: O(n) per call is fine at
    /// inventory sizes and rules out drift between mutations.
    ///
    /// Totals are exact: each line value is below 2^96 (quantity is capped at
    /// `MAX_QUANTITY`), so the sum cannot reach 2^128 before the list holds
    /// 2^32 products.
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().fold(Self::default(), |acc, p| Self {
            count: acc.count + 1,
            total_quantity: acc.total_quantity + u128::from(p.quantity()),
            total_value: acc.total_value + p.line_value(),
        })
    }

    /// Total value with two decimals, e.g. `"15.00"`.
    pub fn total_value_display(&self) -> String {
        format_cents(self.total_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn totals_do_not_saturate_at_u64() {
        let text = format!(
            r#"[{{"id":"01890a5d-ac96-774b-bcce-b302099a8057","name":"Ingot","priceCents":{},"category":"Metals","quantity":{},"createdAt":"2026-10-16T09:00:00Z"}}]"#,
            u64::MAX,
            crate::product::MAX_QUANTITY,
        );
        let products = codec::decode(&text).unwrap();

        let stats = InventoryStats::from_products(&products);
        assert_eq!(stats.total_quantity, u128::from(crate::product::MAX_QUANTITY));
        assert_eq!(
            stats.total_value,
            u128::from(u64::MAX) * u128::from(crate::product::MAX_QUANTITY)
        );
        assert!(stats.total_value > u128::from(u64::MAX));
    }
}
