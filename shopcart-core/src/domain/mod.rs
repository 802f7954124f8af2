//! Core domain entities
//!
//! Pure data structures and pricing rules - no I/O.

mod cart;
pub mod catalog;
pub mod discount;
mod item;
pub mod money;
pub mod offer;
pub mod result;
pub mod table;

pub use cart::Cart;
pub use catalog::{Catalog, Product};
pub use discount::{DiscountOutcome, DiscountPolicy};
pub use item::Item;
pub use offer::Offer;
pub use table::{CartRow, CartTable, TotalRow};
