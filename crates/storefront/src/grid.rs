use serde::Serialize;

use sole_catalog::Catalog;
use sole_merchandising::ClassifyContext;

use crate::card::ShoeCard;

/// The full product listing: one card per catalog record.
///
/// Catalog order is preserved for display; it carries no semantic meaning to
/// the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoeGrid {
    cards: Vec<ShoeCard>,
}

impl ShoeGrid {
    pub fn assemble(catalog: &Catalog, ctx: &ClassifyContext) -> Self {
        let cards: Vec<ShoeCard> = catalog
            .iter()
            .map(|product| ShoeCard::assemble(product, ctx))
            .collect();

        tracing::debug!(
            catalog = %catalog.name(),
            cards = cards.len(),
            "assembled shoe grid"
        );

        Self { cards }
    }

    pub fn cards(&self) -> &[ShoeCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
