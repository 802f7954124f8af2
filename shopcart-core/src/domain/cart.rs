//! Cart domain model

use rust_decimal::Decimal;
use serde::Serialize;

use super::discount::DiscountPolicy;
use super::item::Item;
use super::money::{round_money, validate_price};
use super::result::{Error, Result};

/// Ordered collection of items, unique by name
///
/// Every mutation finishes with [`Cart::update_cart`], so `total` and
/// `discount_applied` always reflect the current contents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    contents: Vec<Item>,
    has_loyalty_card: bool,
    total: Decimal,
    discount_applied: bool,
    #[serde(skip)]
    policy: DiscountPolicy,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(DiscountPolicy::default())
    }
}

impl Cart {
    /// Create an empty cart with a zero total
    pub fn new(policy: DiscountPolicy) -> Self {
        Self {
            contents: Vec::new(),
            has_loyalty_card: false,
            total: round_money(Decimal::ZERO),
            discount_applied: false,
            policy,
        }
    }

    pub fn contents(&self) -> &[Item] {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn discount_applied(&self) -> bool {
        self.discount_applied
    }

    pub fn has_loyalty_card(&self) -> bool {
        self.has_loyalty_card
    }

    pub fn policy(&self) -> &DiscountPolicy {
        &self.policy
    }

    /// Look up a line by name
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.contents.iter().find(|item| item.name() == name)
    }

    /// Total number of units across all lines
    pub fn unit_count(&self) -> u64 {
        self.contents.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Add one unit of a product
    ///
    /// An existing line with the same name gains one unit and keeps its
    /// original price and offer code. Otherwise a new line is appended.
    /// The change is staged first, so on error the cart is left as it was.
    pub fn add(&mut self, name: &str, price: Decimal, offer_code: Option<&str>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::validation("product name cannot be empty"));
        }
        validate_price(price)?;

        let mut contents = self.contents.clone();
        match self.position(name) {
            Some(index) => {
                let item = &mut contents[index];
                item.increment()?;
                item.calculate_sub_total()?;
            }
            None => contents.push(Item::new(name, price, offer_code.map(str::to_string))?),
        }
        sum_sub_totals(&contents)?;

        self.contents = contents;
        self.update_cart()
    }

    /// Remove one unit of the named line
    ///
    /// The line is deleted when its last unit goes. Returns `false` when no
    /// line has this name, in which case the contents are unchanged.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let found = match self.position(name) {
            Some(index) if self.contents[index].quantity() > 1 => {
                let item = &mut self.contents[index];
                item.decrement();
                item.calculate_sub_total()?;
                true
            }
            Some(index) => {
                self.contents.remove(index);
                true
            }
            None => false,
        };

        self.update_cart()?;
        Ok(found)
    }

    /// Remove every line and reset the total
    pub fn empty_cart(&mut self) -> Result<()> {
        self.contents.clear();
        self.total = round_money(Decimal::ZERO);
        self.update_cart()
    }

    /// Toggle the loyalty card and recompute
    pub fn set_loyalty_card(&mut self, has_loyalty_card: bool) -> Result<()> {
        self.has_loyalty_card = has_loyalty_card;
        self.update_cart()
    }

    /// Recompute the total from the current contents
    pub fn update_cart(&mut self) -> Result<()> {
        self.calculate_total()
    }

    /// Sum the item sub-totals, then apply the cart-wide discounts
    pub fn calculate_total(&mut self) -> Result<()> {
        self.total = round_money(sum_sub_totals(&self.contents)?);
        self.apply_discounts();
        Ok(())
    }

    /// Apply the spend and loyalty discounts to `total`
    pub fn apply_discounts(&mut self) {
        let outcome = self.policy.apply(self.total, self.has_loyalty_card);
        self.total = outcome.total;
        self.discount_applied = outcome.discount_applied;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contents.iter().position(|item| item.name() == name)
    }
}

fn sum_sub_totals(contents: &[Item]) -> Result<Decimal> {
    contents.iter().try_fold(Decimal::ZERO, |sum, item| {
        sum.checked_add(item.sub_total())
            .ok_or_else(|| Error::validation("cart total too large"))
    })
}
