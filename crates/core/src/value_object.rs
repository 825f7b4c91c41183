//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values
//! are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values matter.
///
/// Example:
/// - `Money { amount_minor: 14999, currency: Usd }` is a value object
/// - `Product { id: ProductId(...), name: "..." }` is an entity
///
/// To "modify" a value object, create a new one with the new values. The trait
/// requires `Clone`, `PartialEq`, and `Debug` so values stay cheap to copy,
/// comparable by attributes, and inspectable in logs and tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
