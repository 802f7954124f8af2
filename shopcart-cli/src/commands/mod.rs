//! CLI command implementations

pub mod init;
pub mod products;
pub mod quote;
pub mod shop;

use std::path::PathBuf;

use anyhow::{Context, Result};
use shopcart_core::config::Config;
use tracing::debug;

/// Get the shopcart directory from environment or default
pub fn get_shop_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SHOPCART_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".shopcart"))
}

/// Load configuration from the shopcart directory
pub fn load_config() -> Result<Config> {
    let shop_dir = get_shop_dir()?;
    debug!(?shop_dir, "loading settings");
    Config::load(&shop_dir)
        .with_context(|| format!("Failed to load settings from {:?}", shop_dir))
}
