//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

mod cart;

pub use cart::CartService;
