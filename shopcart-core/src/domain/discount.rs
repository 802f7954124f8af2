//! Cart-wide discount rules

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::round_money;
use super::result::{Error, Result};

/// Constants for the cart-wide discounts
///
/// The spend discount fires when the summed total is strictly greater than
/// `spend_threshold`. The loyalty discount is applied afterwards, to the
/// already-reduced figure, so the two compose multiplicatively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPolicy {
    pub spend_threshold: Decimal,
    pub spend_multiplier: Decimal,
    pub loyalty_multiplier: Decimal,
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            spend_threshold: Decimal::new(20, 0),
            spend_multiplier: Decimal::new(90, 2),
            loyalty_multiplier: Decimal::new(98, 2),
        }
    }
}

/// Outcome of applying the cart-wide discounts to a total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountOutcome {
    pub total: Decimal,
    pub discount_applied: bool,
}

impl DiscountPolicy {
    /// Apply the spend discount, then the loyalty discount
    ///
    /// Each step is rounded to two decimal places before the next.
    pub fn apply(&self, total: Decimal, has_loyalty_card: bool) -> DiscountOutcome {
        let mut total = total;
        let mut discount_applied = false;

        if total > self.spend_threshold {
            total = round_money(total * self.spend_multiplier);
            discount_applied = true;
        }

        if has_loyalty_card {
            total = round_money(total * self.loyalty_multiplier);
            discount_applied = true;
        }

        DiscountOutcome { total, discount_applied }
    }

    /// Sanity-check values loaded from configuration
    pub fn validate(&self) -> Result<()> {
        let one = Decimal::ONE;
        if self.spend_threshold.is_sign_negative() {
            return Err(Error::config("spend threshold cannot be negative"));
        }
        if self.spend_multiplier <= Decimal::ZERO || self.spend_multiplier > one {
            return Err(Error::config("spend multiplier must be in (0, 1]"));
        }
        if self.loyalty_multiplier <= Decimal::ZERO || self.loyalty_multiplier > one {
            return Err(Error::config("loyalty multiplier must be in (0, 1]"));
        }
        Ok(())
    }
}
