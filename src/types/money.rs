use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An amount tagged with the currency it is denominated in.
///
/// Missing fields fall back to zero and an empty currency code, so a request
/// that omits `money` entirely is rejected by the amount check rather than
/// by the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub currency_code: String
}

impl Money {
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into()
        }
    }

    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_in(&self, currency_code: &str) -> bool {
        self.currency_code == currency_code
    }

    pub fn checked_add(&self, amount: Decimal) -> Option<Money> {
        self.amount.checked_add(amount)
            .map(|amount| Money::new(amount, self.currency_code.clone()))
    }

    pub fn checked_sub(&self, amount: Decimal) -> Option<Money> {
        self.amount.checked_sub(amount)
            .map(|amount| Money::new(amount, self.currency_code.clone()))
    }
}

impl Display for Money {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.amount.normalize(), self.currency_code)
    }
}
