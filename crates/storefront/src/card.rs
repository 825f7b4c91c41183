use serde::Serialize;

use sole_catalog::Product;
use sole_display::{format_money, format_price, pluralize};
use sole_merchandising::{ClassifyContext, Variant, classify};

/// Everything the rendering layer needs to draw one shoe card.
///
/// A pure projection of a record plus its classification at a given
/// evaluation date. `sale_price_display` is produced unconditionally and is
/// empty for records that are not discounted, so views never branch on the
/// record itself — only on the `show_*` flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoeCard {
    pub slug: String,
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub variant: Variant,
    pub badge_text: Option<&'static str>,
    pub price_display: String,
    pub show_strikethrough_price: bool,
    pub sale_price_display: String,
    pub show_sale_price: bool,
    pub color_label: String,
}

impl ShoeCard {
    pub fn assemble(product: &Product, ctx: &ClassifyContext) -> Self {
        let classification = classify(product, ctx);

        Self {
            slug: product.slug().to_string(),
            href: format!("/shoe/{}", product.slug()),
            name: product.name().to_string(),
            image_src: product.image_src().to_string(),
            variant: classification.variant,
            badge_text: classification.badge_text,
            price_display: format_money(&product.price()),
            show_strikethrough_price: classification.show_strikethrough_price,
            sale_price_display: format_price(product.sale_price().as_ref()),
            show_sale_price: classification.show_sale_price,
            color_label: pluralize("Color", product.num_of_colors()),
        }
    }
}
