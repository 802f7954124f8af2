//! Cart service - mutate, recompute, redraw

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::result::{Error, Result};
use crate::domain::{Cart, CartTable, DiscountPolicy, Product};
use crate::ports::CartView;

/// Owns the session's cart and the view that displays it
///
/// Every operation mutates the cart, lets it recompute, then redraws the
/// view exactly once from a freshly built table.
pub struct CartService {
    cart: Cart,
    view: Box<dyn CartView>,
}

impl CartService {
    pub fn new(policy: DiscountPolicy, view: Box<dyn CartView>) -> Self {
        Self {
            cart: Cart::new(policy),
            view,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current table projection
    pub fn table(&self) -> CartTable {
        CartTable::from_cart(&self.cart)
    }

    /// Add one unit of a product
    pub fn add(&mut self, name: &str, price: Decimal, offer_code: Option<&str>) -> Result<()> {
        self.cart.add(name, price, offer_code)?;
        debug!(
            product = name,
            quantity = self.cart.item(name).map(|i| i.quantity()),
            total = %self.cart.total(),
            "added to cart"
        );
        self.redraw()
    }

    /// Add one unit of a catalog product
    pub fn add_product(&mut self, product: &Product) -> Result<()> {
        self.add(&product.name, product.price, product.offer_code.as_deref())
    }

    /// The "+" control on a row: one more unit at the line's own price and offer
    pub fn increment(&mut self, name: &str) -> Result<()> {
        let (price, offer_code) = match self.cart.item(name) {
            Some(item) => (item.price(), item.offer_code().map(str::to_string)),
            None => return Err(Error::not_found(format!("'{}' is not in the cart", name))),
        };
        self.add(name, price, offer_code.as_deref())
    }

    /// The "-" control on a row: one unit fewer, deleting the line at zero
    ///
    /// Returns whether the name was in the cart. The view is redrawn either way.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let found = self.cart.remove(name)?;
        if found {
            debug!(product = name, total = %self.cart.total(), "removed from cart");
        } else {
            debug!(product = name, "remove ignored, not in cart");
        }
        self.redraw()?;
        Ok(found)
    }

    /// The loyalty-card checkbox
    pub fn set_loyalty_card(&mut self, has_loyalty_card: bool) -> Result<()> {
        self.cart.set_loyalty_card(has_loyalty_card)?;
        info!(has_loyalty_card, total = %self.cart.total(), "loyalty card changed");
        self.redraw()
    }

    /// Remove everything
    pub fn empty_cart(&mut self) -> Result<()> {
        self.cart.empty_cart()?;
        info!("cart emptied");
        self.redraw()
    }

    /// Recompute and redraw without changing the contents
    pub fn update_cart(&mut self) -> Result<()> {
        self.cart.update_cart()?;
        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        let table = CartTable::from_cart(&self.cart);
        self.view.redraw(&table)
    }
}
