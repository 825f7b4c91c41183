//! Storefront view-model assembly.
//!
//! Projects catalog records through the merchandising classifier and the
//! display formatters into ready-to-render card and grid view models. The
//! actual rendering (markup, styling, layout) is an external concern; views
//! read the precomputed fields here instead of re-deriving variant logic.

pub mod card;
pub mod grid;

pub use card::ShoeCard;
pub use grid::ShoeGrid;
