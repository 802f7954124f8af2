//! Per-item offer codes

use serde::{Deserialize, Serialize};

/// Offer code for "buy one, get one free"
pub const BOGOF: &str = "bogof";

/// Sub-total rule selected by an item's offer code
///
/// Offer codes are free-form tags. Only [`BOGOF`] selects a discount; any
/// other code, or none at all, prices the line at full price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Offer {
    /// Pay for ceil(quantity / 2) units
    BuyOneGetOneFree,
    /// Pay for every unit
    FullPrice,
}

impl Offer {
    /// Resolve an offer code to its rule
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(BOGOF) => Offer::BuyOneGetOneFree,
            _ => Offer::FullPrice,
        }
    }

    /// Number of units the customer pays for
    pub fn payable_quantity(&self, quantity: u32) -> u32 {
        match self {
            Offer::BuyOneGetOneFree => quantity.div_ceil(2),
            Offer::FullPrice => quantity,
        }
    }

    /// Whether the rule reduced the cost for this quantity
    pub fn is_discounted(&self, quantity: u32) -> bool {
        self.payable_quantity(quantity) < quantity
    }
}
