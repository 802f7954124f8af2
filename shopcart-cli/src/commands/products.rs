//! Products command - list the catalog

use anyhow::Result;

use super::load_config;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let config = load_config()?;
    let catalog = &config.catalog;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        output::warning("No products in the catalog.");
        return Ok(());
    }

    println!("{}", output::catalog_table(catalog));
    Ok(())
}
