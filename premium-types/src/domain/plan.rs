//! Premium plan pricing.

use super::money::{Currency, Money};

/// What a premium registration costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumPlan {
    pub price: Money,
}

impl PremiumPlan {
    pub fn new(price: Money) -> Self {
        Self { price }
    }
}

impl Default for PremiumPlan {
    /// $9.99
    fn default() -> Self {
        Self {
            price: Money::from_unsigned(999, Currency::USD),
        }
    }
}
