//! Product catalog - the products offered for adding to a cart

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::is_valid_price;
use super::result::{Error, Result};

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_code: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, offer_code: Option<&str>) -> Self {
        Self {
            name: name.into(),
            price,
            offer_code: offer_code.map(str::to_string),
        }
    }

    /// Validate product data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::config("product name cannot be empty"));
        }
        if !is_valid_price(self.price) {
            return Err(Error::config(format!(
                "price of {} cannot be negative: {}",
                self.name, self.price
            )));
        }
        Ok(())
    }
}

/// Ordered list of products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Product::new("Bread", Decimal::new(100, 2), Some("bogof")),
            Product::new("Milk", Decimal::new(95, 2), None),
            Product::new("Eggs", Decimal::new(210, 2), None),
            Product::new("Coffee", Decimal::new(450, 2), None),
            Product::new("Cheese", Decimal::new(325, 2), Some("bogof")),
            Product::new("Wine", Decimal::new(899, 2), None),
        ])
    }
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&Product> {
        let name = name.trim();
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Get a product by its 1-based position in the listing
    pub fn get(&self, number: usize) -> Option<&Product> {
        number.checked_sub(1).and_then(|i| self.products.get(i))
    }

    /// Resolve a user reference: a listing number or a product name
    pub fn lookup(&self, reference: &str) -> Option<&Product> {
        match reference.trim().parse::<usize>() {
            Ok(number) => self.get(number),
            Err(_) => self.find(reference),
        }
    }

    /// Validate every product and reject duplicate names
    pub fn validate(&self) -> Result<()> {
        for (i, product) in self.products.iter().enumerate() {
            product.validate()?;
            if self.products[..i]
                .iter()
                .any(|p| p.name.eq_ignore_ascii_case(&product.name))
            {
                return Err(Error::config(format!("duplicate product name: {}", product.name)));
            }
        }
        Ok(())
    }
}
