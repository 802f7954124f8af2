//! Init command - write a default settings.json

use anyhow::{Context, Result};

use shopcart_core::config::Config;

use super::get_shop_dir;
use crate::output;

pub fn run(force: bool) -> Result<()> {
    let shop_dir = get_shop_dir()?;
    std::fs::create_dir_all(&shop_dir)
        .with_context(|| format!("Failed to create shopcart directory: {:?}", shop_dir))?;

    let settings_path = shop_dir.join("settings.json");
    if settings_path.exists() && !force {
        anyhow::bail!(
            "{:?} already exists. Use --force to reset the catalog and discounts.",
            settings_path
        );
    }

    Config::default().save(&shop_dir)?;
    output::success(&format!("Wrote {}", settings_path.display()));
    Ok(())
}
