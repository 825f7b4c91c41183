//! Built-in demo dataset.
//!
//! Plays the role of the static data provider: a fixed, ordered set of
//! footwear records with a mix of on-sale, recently released, and older
//! products. All prices are USD minor units.

use chrono::NaiveDate;

use sole_core::{CatalogId, Currency, DomainError, DomainResult, Money, ProductId};

use crate::catalog::Catalog;
use crate::product::Product;

fn date(year: i32, month: u32, day: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::validation(format!("invalid seed date {year}-{month:02}-{day:02}"))
    })
}

fn shoe(
    slug: &str,
    name: &str,
    price_minor: u64,
    sale_minor: Option<u64>,
    release_date: NaiveDate,
    num_of_colors: u32,
) -> DomainResult<Product> {
    Product::new(
        ProductId::new(),
        slug.parse()?,
        name,
        format!("/images/shoes/{slug}.jpg"),
        Money::from_minor(price_minor, Currency::Usd),
        sale_minor.map(|m| Money::from_minor(m, Currency::Usd)),
        release_date,
        num_of_colors,
    )
}

/// The demo storefront catalog.
pub fn demo_catalog() -> DomainResult<Catalog> {
    let products = vec![
        shoe(
            "terra-trail-runner",
            "Terra Trail Runner",
            14_999,
            None,
            date(2026, 7, 20)?,
            4,
        )?,
        shoe(
            "harbor-canvas-slip-on",
            "Harbor Canvas Slip-On",
            5_495,
            // Discounted and recently released at the same time; the sale
            // badge wins in classification.
            Some(3_995),
            date(2026, 7, 28)?,
            3,
        )?,
        shoe(
            "court-classic-low",
            "Court Classic Low",
            8_999,
            Some(6_999),
            date(2025, 11, 2)?,
            2,
        )?,
        shoe(
            "summit-waterproof-hiker",
            "Summit Waterproof Hiker",
            21_000,
            None,
            date(2026, 6, 30)?,
            2,
        )?,
        shoe(
            "midnight-chelsea-boot",
            "Midnight Chelsea Boot",
            18_000,
            None,
            date(2024, 9, 15)?,
            1,
        )?,
        shoe(
            "pacer-knit-racer",
            "Pacer Knit Racer",
            12_000,
            None,
            date(2025, 2, 14)?,
            5,
        )?,
        shoe(
            "varsity-suede-high-top",
            "Varsity Suede High-Top",
            9_999,
            None,
            date(2023, 8, 1)?,
            1,
        )?,
        shoe(
            "driftwood-sandal",
            "Driftwood Sandal",
            4_500,
            Some(2_999),
            date(2024, 5, 5)?,
            2,
        )?,
    ];

    Catalog::new(CatalogId::new(), "All Shoes", products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_builds_cleanly() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.name(), "All Shoes");
    }

    #[test]
    fn demo_catalog_mixes_discounted_and_full_price_records() {
        let catalog = demo_catalog().unwrap();
        let discounted = catalog.iter().filter(|p| p.is_discounted()).count();
        assert_eq!(discounted, 3);
        assert!(discounted < catalog.len());
    }

    #[test]
    fn demo_catalog_slugs_resolve() {
        let catalog = demo_catalog().unwrap();
        let slug = "court-classic-low".parse().unwrap();
        let product = catalog.get_by_slug(&slug).unwrap();
        assert_eq!(product.name(), "Court Classic Low");
        assert!(product.is_discounted());
    }
}
