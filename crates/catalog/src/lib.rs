//! Catalog domain module.
//!
//! This crate contains the footwear product record and the ordered catalog
//! collection, implemented purely as deterministic domain data (no IO, no
//! HTTP, no storage). The bundled seed dataset plays the role of the static
//! data provider.

pub mod catalog;
pub mod product;
pub mod seed;

pub use catalog::Catalog;
pub use product::Product;
