//! Persisted encoding of the product list (JSON array, camelCase fields).

use std::collections::HashSet;

use crate::error::CodecError;
use crate::product::{MAX_QUANTITY, MIN_NAME_LEN, Product, name_key};

/// Encode the full product list.
pub fn encode(products: &[Product]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(products)?)
}

/// Decode a product list, rejecting text that is malformed or whose contents
/// break a store invariant (duplicate ids or names, short names, blank
/// categories, quantities above `MAX_QUANTITY`). Names are compared the way
/// the store compares them: trimmed and case-insensitive.
pub fn decode(text: &str) -> Result<Vec<Product>, CodecError> {
    let products: Vec<Product> = serde_json::from_str(text)?;

    let mut ids = HashSet::with_capacity(products.len());
    let mut names = HashSet::with_capacity(products.len());
    for p in &products {
        if !ids.insert(p.id_typed()) {
            return Err(CodecError::corrupt(format!("duplicate id {}", p.id_typed())));
        }
        if !names.insert(name_key(p.name())) {
            return Err(CodecError::corrupt(format!("duplicate name {:?}", p.name())));
        }
        if p.name().trim().chars().count() < MIN_NAME_LEN {
            return Err(CodecError::corrupt(format!("name too short for {}", p.id_typed())));
        }
        if p.category().trim().is_empty() {
            return Err(CodecError::corrupt(format!("missing category for {}", p.id_typed())));
        }
        if p.quantity() > MAX_QUANTITY {
            return Err(CodecError::corrupt(format!("quantity too large for {}", p.id_typed())));
        }
    }

    Ok(products)
}

/// Lenient decode used when hydrating a store: any failure yields an empty
/// list. Corrupt persisted state must never take the session down.
pub fn deserialize(text: &str) -> Vec<Product> {
    match decode(text) {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable persisted inventory");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEN: &str = r#"{"id":"01890a5d-ac96-774b-bcce-b302099a8057","name":"Pen","priceCents":150,"category":"Office","quantity":10,"createdAt":"2026-10-16T09:00:00Z"}"#;
    const PENCIL: &str = r#"{"id":"01890a5d-ac96-774b-bcce-b302099a8058","name":"Pencil","priceCents":80,"category":"Office","quantity":3,"description":"HB","createdAt":"2026-10-16T09:05:00Z"}"#;

    #[test]
    fn decodes_camel_case_list_in_order() {
        let products = decode(&format!("[{PEN},{PENCIL}]")).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name(), "Pen");
        assert_eq!(products[0].price().cents(), 150);
        assert_eq!(products[1].description(), Some("HB"));
    }

    #[test]
    fn encode_omits_absent_description() {
        let products = decode(&format!("[{PEN}]")).unwrap();
        let text = encode(&products).unwrap();
        assert!(!text.contains("description"));
        assert!(text.contains("\"priceCents\":150"));
        assert!(text.contains("\"createdAt\""));
    }

    #[test]
    fn malformed_text_deserializes_to_empty() {
        for text in ["", "not json", "{\"a\":1}", "[{\"name\":\"Pen\"}]", "[1,2,3]"] {
            assert!(deserialize(text).is_empty(), "input: {text:?}");
        }
    }

    #[test]
    fn negative_quantity_or_zero_price_is_rejected() {
        let negative = PEN.replace("\"quantity\":10", "\"quantity\":-1");
        assert!(matches!(decode(&format!("[{negative}]")), Err(CodecError::Json(_))));

        let free = PEN.replace("\"priceCents\":150", "\"priceCents\":0");
        assert!(matches!(decode(&format!("[{free}]")), Err(CodecError::Json(_))));
    }

    #[test]
    fn duplicate_ids_are_corrupt() {
        let twin = PENCIL.replace("8058", "8057");
        let err = decode(&format!("[{PEN},{twin}]")).unwrap_err();
        assert!(matches!(err, CodecError::Corrupt(ref m) if m.contains("duplicate id")));
    }

    #[test]
    fn case_insensitive_duplicate_names_are_corrupt() {
        let shouting = PENCIL.replace("\"Pencil\"", "\"PEN\"");
        let err = decode(&format!("[{PEN},{shouting}]")).unwrap_err();
        assert!(matches!(err, CodecError::Corrupt(ref m) if m.contains("duplicate name")));
        assert!(deserialize(&format!("[{PEN},{shouting}]")).is_empty());
    }

    #[test]
    fn names_differing_only_by_padding_and_case_are_corrupt() {
        let padded = PEN.replace("\"Pen\"", "\" Pen\"");
        let trailing = PENCIL.replace("\"Pencil\"", "\"pen \"");
        let err = decode(&format!("[{padded},{trailing}]")).unwrap_err();
        assert!(matches!(err, CodecError::Corrupt(ref m) if m.contains("duplicate name")));
    }

    #[test]
    fn quantity_above_cap_is_corrupt() {
        let huge = PEN.replace("\"quantity\":10", &format!("\"quantity\":{}", MAX_QUANTITY + 1));
        let err = decode(&format!("[{huge}]")).unwrap_err();
        assert!(matches!(err, CodecError::Corrupt(ref m) if m.contains("quantity too large")));
    }

    #[test]
    fn description_survives_encode_then_decode() {
        let products = decode(&format!("[{PEN},{PENCIL}]")).unwrap();
        let text = encode(&products).unwrap();
        assert!(text.contains("\"description\":\"HB\""));
        assert_eq!(decode(&text).unwrap(), products);
    }

    #[test]
    fn blank_category_is_corrupt() {
        let blank = PEN.replace("\"Office\"", "\" \"");
        assert!(matches!(decode(&format!("[{blank}]")), Err(CodecError::Corrupt(_))));
    }
}
