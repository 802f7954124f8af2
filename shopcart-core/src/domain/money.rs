//! Money helpers
//!
//! All amounts are `Decimal` with two decimal places. Every derived amount
//! (sub-totals, totals, discounted totals) goes through [`round_money`].

use rust_decimal::{Decimal, RoundingStrategy};

use super::result::{Error, Result};

/// Number of decimal places carried by every amount
pub const MONEY_DP: u32 = 2;

/// Round to two decimal places, half away from zero, with a fixed scale of 2
///
/// The fixed scale means `2` is stored as `2.00`, so `Display` and serde
/// both produce two decimals.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DP);
    rounded
}

/// Parse a unit price entered as text
pub fn parse_price(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("price is empty"));
    }

    let price: Decimal = trimmed
        .parse()
        .map_err(|_| Error::validation(format!("invalid price: {}", trimmed)))?;

    validate_price(price)?;
    Ok(price)
}

/// Whether the pricing rules accept this unit price
pub fn is_valid_price(price: Decimal) -> bool {
    !price.is_sign_negative() || price.is_zero()
}

/// Reject prices the pricing rules cannot work with
pub fn validate_price(price: Decimal) -> Result<()> {
    if !is_valid_price(price) {
        return Err(Error::validation(format!("price cannot be negative: {}", price)));
    }
    Ok(())
}
