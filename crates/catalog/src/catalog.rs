use serde::{Deserialize, Serialize};

use sole_core::{CatalogId, DomainError, DomainResult, Entity, Slug};

use crate::product::Product;

/// An ordered product listing.
///
/// Order is preserved for display and carries no semantic meaning to the
/// classifier. Slugs are the linking key and must be unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    id: CatalogId,
    name: String,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(
        id: CatalogId,
        name: impl Into<String>,
        products: Vec<Product>,
    ) -> DomainResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("catalog name cannot be empty"));
        }

        for (i, product) in products.iter().enumerate() {
            let duplicate = products[..i]
                .iter()
                .any(|earlier| earlier.slug() == product.slug());
            if duplicate {
                return Err(DomainError::invariant(format!(
                    "duplicate slug in catalog: {}",
                    product.slug()
                )));
            }
        }

        Ok(Self { id, name, products })
    }

    pub fn id_typed(&self) -> CatalogId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its linking slug.
    pub fn find_by_slug(&self, slug: &Slug) -> Option<&Product> {
        self.products.iter().find(|p| p.slug() == slug)
    }

    /// Like [`Catalog::find_by_slug`] but missing slugs are a domain error.
    pub fn get_by_slug(&self, slug: &Slug) -> DomainResult<&Product> {
        self.find_by_slug(slug).ok_or_else(DomainError::not_found)
    }
}

impl Entity for Catalog {
    type Id = CatalogId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
