//! Quote command - price a list of products without a session

use anyhow::Result;

use shopcart_core::adapters::html::render_html;
use shopcart_core::ports::NullView;
use shopcart_core::ShopContext;

use super::load_config;
use crate::output;

pub fn run(products: &[String], loyalty_card: bool, json: bool, html: bool) -> Result<()> {
    let mut config = load_config()?;
    config.loyalty_card |= loyalty_card;

    let mut ctx = ShopContext::with_config(config, Box::new(NullView))?;
    for reference in products {
        ctx.add_to_cart(reference)?;
    }

    let cart = ctx.cart_service.cart();

    if json {
        println!("{}", serde_json::to_string_pretty(cart)?);
        return Ok(());
    }

    let table = ctx.cart_service.table();
    if html {
        println!("{}", render_html(&table));
        return Ok(());
    }

    println!("{}", output::cart_table(&table));
    if cart.has_loyalty_card() {
        output::info("Loyalty card applied");
    }
    Ok(())
}
