//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: a `Price` of 150 cents equals every other
/// `Price` of 150 cents. They are immutable; "changing" one means building a
/// new one through its validating constructor, so a value object that exists
/// always satisfies its own invariants.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
