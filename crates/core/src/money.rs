//! Money value object: minor-unit amounts with an explicit currency.
//!
//! Amounts are stored in the smallest currency unit (e.g. cents) so that
//! price arithmetic and formatting stay integer-exact. Decimal input is only
//! accepted through [`Money::from_major_f64`], which rounds half-up to two
//! decimal places at the construction boundary.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// ISO currency code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    /// ISO 4217 code (e.g. `"USD"`).
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Display symbol used by the price formatter.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

/// A monetary amount in minor units (e.g. cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount_minor: u64,
    currency: Currency,
}

impl Money {
    /// Amount already expressed in minor units (e.g. `14999` => $149.99).
    pub fn from_minor(amount_minor: u64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Amount in whole major units (e.g. `100` => $100.00).
    pub fn from_major(amount_major: u64, currency: Currency) -> Self {
        Self {
            amount_minor: amount_major * 100,
            currency,
        }
    }

    /// Decimal amount in major units, rounded half-up to two decimal places.
    ///
    /// Rejects negative and non-finite input; this is the only place decimal
    /// values enter the domain.
    pub fn from_major_f64(amount: f64, currency: Currency) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("amount must be finite"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }

        // `f64::round` rounds half away from zero; for non-negative amounts
        // that is exactly half-up.
        let minor = (amount * 100.0).round();
        if minor > u64::MAX as f64 {
            return Err(DomainError::validation("amount out of range"));
        }

        Ok(Self {
            amount_minor: minor as u64,
            currency,
        })
    }

    pub fn amount_minor(&self) -> u64 {
        self.amount_minor
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whole part of the amount (e.g. `149` for $149.99).
    pub fn units(&self) -> u64 {
        self.amount_minor / 100
    }

    /// Fractional part of the amount, 0–99 (e.g. `99` for $149.99).
    pub fn subunits(&self) -> u64 {
        self.amount_minor % 100
    }

    /// True when `self` is strictly below `other`.
    ///
    /// Comparing across currencies is a caller bug and yields an error rather
    /// than a silent ordering.
    pub fn is_less_than(&self, other: &Money) -> DomainResult<bool> {
        if self.currency != other.currency {
            return Err(DomainError::invariant(format!(
                "currency mismatch: {} vs {}",
                self.currency.code(),
                other.currency.code()
            )));
        }
        Ok(self.amount_minor < other.amount_minor)
    }
}

impl ValueObject for Money {}
