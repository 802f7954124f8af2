//! Shopcart Core - cart state, pricing rules and rendering
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Items, the cart, offers, discounts, catalog, table projection
//! - **ports**: Trait definitions for external dependencies (CartView)
//! - **services**: Business logic orchestration (CartService)
//! - **adapters**: Concrete implementations (HTML rendering)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use anyhow::Result;

use config::Config;
use services::CartService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{Cart, CartTable, Catalog, DiscountPolicy, Item, Product};
pub use ports::CartView;

/// Main context for a shopping session
///
/// Holds the configuration and the single cart of the session, which is
/// drawn on the view given at construction.
pub struct ShopContext {
    pub config: Config,
    pub cart_service: CartService,
}

impl ShopContext {
    /// Load configuration from `shop_dir` and open an empty cart on `view`
    ///
    /// The view receives one initial redraw, so it starts out showing the
    /// empty cart (or the loyalty card state from config).
    pub fn new(shop_dir: &Path, view: Box<dyn CartView>) -> Result<Self> {
        let config = Config::load(shop_dir)?;
        Self::with_config(config, view)
    }

    /// Open an empty cart on `view` using an already loaded configuration
    pub fn with_config(config: Config, view: Box<dyn CartView>) -> Result<Self> {
        let mut cart_service = CartService::new(config.discounts, view);
        if config.loyalty_card {
            cart_service.set_loyalty_card(true)?;
        } else {
            cart_service.update_cart()?;
        }

        Ok(Self {
            config,
            cart_service,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.config.catalog
    }

    /// Add a catalog product by name or listing number
    pub fn add_to_cart(&mut self, reference: &str) -> Result<()> {
        let product = self
            .config
            .catalog
            .lookup(reference)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("no product matches '{}'", reference.trim())))?;
        self.cart_service.add_product(&product)?;
        Ok(())
    }
}
