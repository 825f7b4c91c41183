//! Merchandising domain module.
//!
//! This crate decides which display variant a product card gets. The decision
//! is implemented purely as deterministic domain logic (no IO, no clock reads
//! outside [`classifier::ClassifyContext::now`]): an ordered rule table is
//! evaluated first-match-wins, so the priority between "on sale" and "just
//! released" is data, not control flow.

pub mod classifier;
pub mod recency;
pub mod variant;

pub use classifier::{Classification, ClassifyContext, Rule, RULES, classify};
pub use recency::RecencyWindow;
pub use variant::Variant;
