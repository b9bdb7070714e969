//! `stockroom-core` — domain building blocks shared by the inventory crates.
//!
//! Pure types only: identifiers, the entity/value-object traits. No IO.

pub mod entity;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use id::{IdParseError, ProductId};
pub use value_object::ValueObject;
