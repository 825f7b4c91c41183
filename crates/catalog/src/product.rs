use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sole_core::{DomainError, DomainResult, Entity, Money, ProductId, Slug};

/// A footwear product record as supplied by the data provider.
///
/// Records are read-only to the rest of the system: the classifier and the
/// display layer derive everything per evaluation, nothing is stored back.
/// `sale_price` is present iff the item is currently discounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    slug: Slug,
    name: String,
    image_src: String,
    price: Money,
    sale_price: Option<Money>,
    release_date: NaiveDate,
    num_of_colors: u32,
}

impl Product {
    /// Validate and build a product record.
    ///
    /// Validation lives here, at the data-provider boundary; downstream
    /// consumers (classifier, formatters) are total over constructed records.
    pub fn new(
        id: ProductId,
        slug: Slug,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
        sale_price: Option<Money>,
        release_date: NaiveDate,
        num_of_colors: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let image_src = image_src.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if image_src.trim().is_empty() {
            return Err(DomainError::validation("image source cannot be empty"));
        }

        if num_of_colors == 0 {
            return Err(DomainError::validation(
                "a product must be available in at least one color",
            ));
        }

        if let Some(sale) = &sale_price {
            if !sale.is_less_than(&price)? {
                return Err(DomainError::invariant(
                    "sale price must undercut the list price",
                ));
            }
        }

        Ok(Self {
            id,
            slug,
            name,
            image_src,
            price,
            sale_price,
            release_date,
            num_of_colors,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn sale_price(&self) -> Option<Money> {
        self.sale_price
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn num_of_colors(&self) -> u32 {
        self.num_of_colors
    }

    /// True when the record carries a sale price.
    pub fn is_discounted(&self) -> bool {
        self.sale_price.is_some()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sole_core::Currency;

    fn test_slug() -> Slug {
        "test-shoe".parse().unwrap()
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn build(price: Money, sale_price: Option<Money>) -> DomainResult<Product> {
        Product::new(
            ProductId::new(),
            test_slug(),
            "Test Shoe",
            "/images/test-shoe.jpg",
            price,
            sale_price,
            test_date(),
            3,
        )
    }

    #[test]
    fn builds_a_valid_record() {
        let product = build(Money::from_major(100, Currency::Usd), None).unwrap();
        assert_eq!(product.name(), "Test Shoe");
        assert_eq!(product.num_of_colors(), 3);
        assert!(!product.is_discounted());
    }

    #[test]
    fn discounted_record_keeps_its_sale_price() {
        let product = build(
            Money::from_major(100, Currency::Usd),
            Some(Money::from_major(50, Currency::Usd)),
        )
        .unwrap();
        assert!(product.is_discounted());
        assert_eq!(
            product.sale_price().unwrap(),
            Money::from_major(50, Currency::Usd)
        );
    }

    #[test]
    fn rejects_blank_name() {
        let err = Product::new(
            ProductId::new(),
            test_slug(),
            "   ",
            "/images/test-shoe.jpg",
            Money::from_major(100, Currency::Usd),
            None,
            test_date(),
            1,
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn rejects_zero_colors() {
        let err = Product::new(
            ProductId::new(),
            test_slug(),
            "Test Shoe",
            "/images/test-shoe.jpg",
            Money::from_major(100, Currency::Usd),
            None,
            test_date(),
            0,
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for zero colors"),
        }
    }

    #[test]
    fn rejects_sale_price_at_or_above_list_price() {
        for sale_minor in [10_000, 12_000] {
            let err = build(
                Money::from_major(100, Currency::Usd),
                Some(Money::from_minor(sale_minor, Currency::Usd)),
            )
            .unwrap_err();
            match err {
                DomainError::InvariantViolation(_) => {}
                _ => panic!("Expected InvariantViolation for sale price {sale_minor}"),
            }
        }
    }

    #[test]
    fn rejects_mixed_currency_sale_price() {
        let err = build(
            Money::from_major(100, Currency::Usd),
            Some(Money::from_major(50, Currency::Eur)),
        )
        .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("currency mismatch")),
            _ => panic!("Expected InvariantViolation for mixed currencies"),
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: every constructed record satisfies sale < price.
            #[test]
            fn constructed_records_keep_the_discount_invariant(
                price_minor in 1u64..1_000_000,
                sale_minor in 0u64..1_000_000,
            ) {
                let result = build(
                    Money::from_minor(price_minor, Currency::Usd),
                    Some(Money::from_minor(sale_minor, Currency::Usd)),
                );
                match result {
                    Ok(product) => {
                        let sale = product.sale_price().unwrap();
                        prop_assert!(sale.amount_minor() < product.price().amount_minor());
                    }
                    Err(DomainError::InvariantViolation(_)) => {
                        prop_assert!(sale_minor >= price_minor);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                }
            }
        }
    }
}
