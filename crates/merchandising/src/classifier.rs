use chrono::{NaiveDate, Utc};
use serde::Serialize;

use sole_catalog::Product;

use crate::recency::RecencyWindow;
use crate::variant::Variant;

/// Evaluation inputs shared by every rule predicate.
///
/// The clock is passed in explicitly so classification stays deterministic;
/// prefer a fixed `today` in tests and [`ClassifyContext::now`] at the edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClassifyContext {
    pub today: NaiveDate,
    pub window: RecencyWindow,
}

impl ClassifyContext {
    pub fn new(today: NaiveDate, window: RecencyWindow) -> Self {
        Self { today, window }
    }

    /// Context for the current UTC calendar date.
    pub fn now(window: RecencyWindow) -> Self {
        Self::new(Utc::now().date_naive(), window)
    }
}

/// A single classification rule: named predicate → variant.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub variant: Variant,
    pub predicate: fn(&Product, &ClassifyContext) -> bool,
}

/// The ordered rule table; first match wins, [`Variant::Default`] otherwise.
///
/// A record can be discounted and recently released at the same time. The
/// table order makes the tiebreak explicit: sale outranks new-release. This
/// ordering is a business rule and must not be rearranged.
pub const RULES: [Rule; 2] = [
    Rule {
        name: "on-sale",
        variant: Variant::OnSale,
        predicate: is_on_sale,
    },
    Rule {
        name: "new-release",
        variant: Variant::NewRelease,
        predicate: is_new_release,
    },
];

/// The record carries a sale price (release date is irrelevant here).
pub fn is_on_sale(product: &Product, _ctx: &ClassifyContext) -> bool {
    product.sale_price().is_some()
}

/// The record's release date falls inside the recency window.
pub fn is_new_release(product: &Product, ctx: &ClassifyContext) -> bool {
    ctx.window.contains(product.release_date(), ctx.today)
}

/// What the rendering layer needs to draw one card.
///
/// The booleans exist so views query them instead of re-deriving variant
/// logic (`show_strikethrough_price`/`show_sale_price` are both true exactly
/// when the variant is `on-sale`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub variant: Variant,
    pub show_strikethrough_price: bool,
    pub show_sale_price: bool,
    pub badge_text: Option<&'static str>,
}

impl Classification {
    fn from_variant(variant: Variant) -> Self {
        let on_sale = variant == Variant::OnSale;
        Self {
            variant,
            show_strikethrough_price: on_sale,
            show_sale_price: on_sale,
            badge_text: variant.badge_text(),
        }
    }
}

/// Classify one record. Total over any constructed [`Product`]; no error path.
pub fn classify(product: &Product, ctx: &ClassifyContext) -> Classification {
    let variant = RULES
        .iter()
        .find(|rule| (rule.predicate)(product, ctx))
        .map(|rule| rule.variant)
        .unwrap_or(Variant::Default);

    Classification::from_variant(variant)
}
