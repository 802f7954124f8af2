//! Cart line item

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::round_money;
use super::offer::Offer;
use super::result::{Error, Result};

/// One product line in a cart, keyed by name
///
/// `sub_total` and `discount_applied` are derived. They are only refreshed
/// by [`Item::calculate_sub_total`], which the cart calls after every
/// quantity change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    name: String,
    price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    offer_code: Option<String>,
    quantity: u32,
    sub_total: Decimal,
    discount_applied: bool,
}

impl Item {
    /// Create a line with quantity 1
    pub fn new(name: impl Into<String>, price: Decimal, offer_code: Option<String>) -> Result<Self> {
        let mut item = Self {
            name: name.into(),
            price,
            offer_code,
            quantity: 1,
            sub_total: Decimal::ZERO,
            discount_applied: false,
        };
        item.calculate_sub_total()?;
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn offer_code(&self) -> Option<&str> {
        self.offer_code.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn sub_total(&self) -> Decimal {
        self.sub_total
    }

    pub fn discount_applied(&self) -> bool {
        self.discount_applied
    }

    /// The rule selected by this line's offer code
    pub fn offer(&self) -> Offer {
        Offer::from_code(self.offer_code())
    }

    /// Recompute `sub_total` and `discount_applied` from price, quantity and offer
    ///
    /// Fails without touching the line when the sub-total does not fit in a `Decimal`.
    pub fn calculate_sub_total(&mut self) -> Result<()> {
        let offer = self.offer();
        let payable = offer.payable_quantity(self.quantity);

        let cost = self
            .price
            .checked_mul(Decimal::from(payable))
            .ok_or_else(|| Error::validation(format!("sub-total too large for {}", self.name)))?;

        self.sub_total = round_money(cost);
        self.discount_applied = offer.is_discounted(self.quantity);
        Ok(())
    }

    pub(crate) fn increment(&mut self) -> Result<()> {
        self.quantity = self
            .quantity
            .checked_add(1)
            .ok_or_else(|| Error::validation(format!("quantity limit reached for {}", self.name)))?;
        Ok(())
    }

    /// Decrement the quantity; callers remove the line instead of going below 1
    pub(crate) fn decrement(&mut self) {
        debug_assert!(self.quantity > 1);
        self.quantity -= 1;
    }
}
