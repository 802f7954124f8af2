//! Table projection of a cart
//!
//! A [`CartTable`] is what every view draws. It is rebuilt from scratch
//! after each mutation; views never diff against a previous table.

use rust_decimal::Decimal;
use serde::Serialize;

use super::cart::Cart;

pub const HEADER_PRODUCT: &str = "Product";
pub const HEADER_QUANTITY: &str = "Quantity";
pub const HEADER_SUB_TOTAL: &str = "Sub-Total";
pub const EMPTY_MESSAGE: &str = "Cart is empty!";
pub const DISCOUNT_BANNER: &str = "Discount applied!";
pub const TOTAL_LABEL: &str = "Total: ";

/// Header labels in column order
pub const HEADERS: [&str; 3] = [HEADER_PRODUCT, HEADER_QUANTITY, HEADER_SUB_TOTAL];

/// One item row, carrying what its -/+ controls need to call back
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRow {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_code: Option<String>,
    pub sub_total: Decimal,
    pub discount_applied: bool,
}

/// The trailing total row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRow {
    pub total: Decimal,
    pub discount_applied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartTable {
    /// Single "Cart is empty!" row
    Empty,
    /// Header, one row per item, then the total row
    Populated { rows: Vec<CartRow>, total: TotalRow },
}

impl CartTable {
    /// Project the current cart state
    pub fn from_cart(cart: &Cart) -> Self {
        if cart.is_empty() {
            return CartTable::Empty;
        }

        let rows = cart
            .contents()
            .iter()
            .map(|item| CartRow {
                name: item.name().to_string(),
                quantity: item.quantity(),
                price: item.price(),
                offer_code: item.offer_code().map(str::to_string),
                sub_total: item.sub_total(),
                discount_applied: item.discount_applied(),
            })
            .collect();

        CartTable::Populated {
            rows,
            total: TotalRow {
                total: cart.total(),
                discount_applied: cart.discount_applied(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CartTable::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_projects_empty_table() {
        let cart = Cart::default();
        assert_eq!(CartTable::from_cart(&cart), CartTable::Empty);
    }

    #[test]
    fn test_populated_table_follows_cart() {
        let mut cart = Cart::default();
        cart.add("Bread", Decimal::new(100, 2), Some("bogof")).unwrap();
        cart.add("Bread", Decimal::new(100, 2), Some("bogof")).unwrap();
        cart.add("Milk", Decimal::new(95, 2), None).unwrap();

        let CartTable::Populated { rows, total } = CartTable::from_cart(&cart) else {
            panic!("expected populated table");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Bread");
        assert_eq!(rows[0].quantity, 2);
        assert!(rows[0].discount_applied);
        assert_eq!(rows[0].offer_code.as_deref(), Some("bogof"));
        assert!(!rows[1].discount_applied);
        assert_eq!(total.total.to_string(), "1.95");
        assert!(!total.discount_applied);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut cart = Cart::default();
        cart.add("Bread", Decimal::new(100, 2), Some("bogof")).unwrap();

        let json = serde_json::to_value(CartTable::from_cart(&cart)).unwrap();
        assert_eq!(json["state"], "populated");
        assert_eq!(json["rows"][0]["subTotal"], "1.00");
        assert_eq!(json["rows"][0]["offerCode"], "bogof");
        assert_eq!(json["total"]["discountApplied"], false);

        let empty = serde_json::to_value(CartTable::Empty).unwrap();
        assert_eq!(empty["state"], "empty");
    }
}
