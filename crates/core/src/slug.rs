//! URL-safe product slugs.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A validated, URL-safe identifier segment (e.g. `"scuffed-stan-smiths"`).
///
/// Slugs are lowercase ASCII alphanumerics separated by single hyphens. They
/// are the stable linking key for product pages (`/shoe/{slug}`), distinct
/// from the time-ordered [`crate::ProductId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::validation(format!(
                "slug has misplaced hyphen: {value:?}"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::validation(format!(
                "slug must be lowercase ASCII alphanumerics and hyphens: {value:?}"
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Slug {}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_kebab_case() {
        for ok in ["air-pegasus-37", "chuck-70", "x1"] {
            assert!(Slug::new(ok).is_ok(), "expected {ok:?} to be valid");
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        for bad in ["", "Upper-Case", "has space", "trailing-", "-leading", "dou--ble"] {
            let err = Slug::new(bad).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for {bad:?}"),
            }
        }
    }

    #[test]
    fn displays_as_raw_segment() {
        let slug: Slug = "trail-runner".parse().unwrap();
        assert_eq!(slug.to_string(), "trail-runner");
        assert_eq!(slug.as_str(), "trail-runner");
    }
}
