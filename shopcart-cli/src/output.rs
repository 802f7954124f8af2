//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};

use shopcart_core::adapters::html::HtmlView;
use shopcart_core::domain::table::{DISCOUNT_BANNER, EMPTY_MESSAGE, HEADERS, TOTAL_LABEL};
use shopcart_core::{CartTable, CartView, Catalog, CoreResult};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Draw the catalog with 1-based listing numbers
pub fn catalog_table(catalog: &Catalog) -> Table {
    let mut table = create_table();
    table.set_header(vec!["#", "Product", "Price", "Offer"]);
    for (i, product) in catalog.products().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&product.name),
            Cell::new(format!("{:.2}", product.price)).set_alignment(CellAlignment::Right),
            Cell::new(product.offer_code.as_deref().unwrap_or("")),
        ]);
    }
    table
}

fn with_banner(amount: impl std::fmt::Display, discount_applied: bool) -> String {
    if discount_applied {
        format!("{} {}", amount, DISCOUNT_BANNER.green())
    } else {
        amount.to_string()
    }
}

/// Draw the cart table for the terminal
pub fn cart_table(cart: &CartTable) -> Table {
    let mut table = create_table();

    match cart {
        CartTable::Empty => {
            table.add_row(vec![EMPTY_MESSAGE]);
        }
        CartTable::Populated { rows, total } => {
            table.set_header(HEADERS.to_vec());
            for row in rows {
                table.add_row(vec![
                    Cell::new(&row.name),
                    Cell::new(format!("[-] {} [+]", row.quantity)).set_alignment(CellAlignment::Center),
                    Cell::new(with_banner(row.sub_total, row.discount_applied))
                        .set_alignment(CellAlignment::Right),
                ]);
            }
            table.add_row(vec![
                Cell::new(TOTAL_LABEL.trim().bold()),
                Cell::new(""),
                Cell::new(with_banner(total.total.to_string().bold(), total.discount_applied))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
    }

    table
}

/// CartView that prints the table on every redraw
///
/// Optionally keeps an HTML file in step with the terminal.
pub struct TerminalView {
    html: Option<HtmlView>,
}

impl TerminalView {
    pub fn new(html: Option<HtmlView>) -> Self {
        Self { html }
    }
}

impl CartView for TerminalView {
    fn redraw(&mut self, table: &CartTable) -> CoreResult<()> {
        println!("{}", cart_table(table));
        if let Some(html) = &mut self.html {
            html.redraw(table)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shopcart_core::Cart;

    #[test]
    fn test_empty_cart_table() {
        let rendered = cart_table(&CartTable::Empty).to_string();
        assert!(rendered.contains(EMPTY_MESSAGE));
        assert!(!rendered.contains("Sub-Total"));
    }

    #[test]
    fn test_populated_cart_table() {
        colored::control::set_override(false);

        let mut cart = Cart::default();
        cart.add("Bread", Decimal::new(100, 2), Some("bogof")).unwrap();
        cart.add("Bread", Decimal::new(100, 2), Some("bogof")).unwrap();

        let rendered = cart_table(&CartTable::from_cart(&cart)).to_string();
        assert!(rendered.contains("Sub-Total"));
        assert!(rendered.contains("[-] 2 [+]"));
        assert!(rendered.contains("1.00 Discount applied!"));
        assert!(rendered.contains("Total"));
    }
}
