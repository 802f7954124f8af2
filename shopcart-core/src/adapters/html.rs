//! HTML adapter for the CartView port
//!
//! Produces the `<tr>` rows of the cart table, one per line. Item controls
//! carry `data-*` attributes naming the action and the product, so a page
//! script can route clicks back to the cart.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::domain::result::Result;
use crate::domain::table::{DISCOUNT_BANNER, EMPTY_MESSAGE, HEADERS, TOTAL_LABEL};
use crate::domain::{CartRow, CartTable, TotalRow};
use crate::ports::CartView;

/// Render a cart table as table rows
pub fn render_html(table: &CartTable) -> String {
    match table {
        CartTable::Empty => format!("<tr><td>{}</td></tr>", escape(EMPTY_MESSAGE)),
        CartTable::Populated { rows, total } => {
            let mut lines = Vec::with_capacity(rows.len() + 2);
            lines.push(header_row());
            lines.extend(rows.iter().map(item_row));
            lines.push(total_row(total));
            lines.join("\n")
        }
    }
}

fn header_row() -> String {
    let cells: String = HEADERS
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    format!("<tr>{}</tr>", cells)
}

fn item_row(row: &CartRow) -> String {
    let name = escape(&row.name);

    let mut plus = format!(
        r#"<button class="cart-button" data-action="add" data-name="{}" data-price="{}""#,
        name, row.price
    );
    if let Some(code) = &row.offer_code {
        let _ = write!(plus, r#" data-offercode="{}""#, escape(code));
    }
    plus.push_str(">+</button>");

    let minus = format!(
        r#"<button class="cart-button" data-action="remove" data-name="{}">-</button>"#,
        name
    );

    format!(
        "<tr><td>{}</td><td>{}{}{}</td><td>{}{}</td></tr>",
        name,
        row.quantity,
        minus,
        plus,
        row.sub_total,
        banner(row.discount_applied),
    )
}

fn total_row(total: &TotalRow) -> String {
    format!(
        r#"<tr id="total-row"><td colspan="2">{}</td><td>{}{}</td></tr>"#,
        escape(TOTAL_LABEL),
        total.total,
        banner(total.discount_applied),
    )
}

fn banner(discount_applied: bool) -> String {
    if discount_applied {
        format!(r#"<span class="discount-banner">{}</span>"#, escape(DISCOUNT_BANNER))
    } else {
        String::new()
    }
}

/// Escape text for use in element content and quoted attributes
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// View holding the latest markup, optionally mirrored to a file
///
/// Each redraw replaces the markup and rewrites the file in full.
#[derive(Debug, Default)]
pub struct HtmlView {
    markup: String,
    output: Option<PathBuf>,
    redraws: u64,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also write the markup to `path` on every redraw
    pub fn with_output(path: impl Into<PathBuf>) -> Self {
        Self {
            output: Some(path.into()),
            ..Self::default()
        }
    }

    /// Markup from the most recent redraw
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of redraws received
    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl CartView for HtmlView {
    fn redraw(&mut self, table: &CartTable) -> Result<()> {
        self.markup = render_html(table);
        self.redraws += 1;

        if let Some(path) = &self.output {
            std::fs::write(path, &self.markup)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cart;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    #[test]
    fn test_empty_state() {
        assert_eq!(render_html(&CartTable::Empty), "<tr><td>Cart is empty!</td></tr>");
    }

    #[test]
    fn test_populated_rows() {
        let mut cart = Cart::default();
        for _ in 0..3 {
            cart.add("Bread", Decimal::new(100, 2), Some("bogof")).unwrap();
        }
        cart.add("Milk", Decimal::new(95, 2), None).unwrap();

        let html = render_html(&CartTable::from_cart(&cart));
        let lines: Vec<&str> = html.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "<tr><th>Product</th><th>Quantity</th><th>Sub-Total</th></tr>");
        assert_eq!(
            lines[1],
            concat!(
                "<tr><td>Bread</td><td>3",
                r#"<button class="cart-button" data-action="remove" data-name="Bread">-</button>"#,
                r#"<button class="cart-button" data-action="add" data-name="Bread" data-price="1.00" data-offercode="bogof">+</button>"#,
                r#"</td><td>2.00<span class="discount-banner">Discount applied!</span></td></tr>"#,
            )
        );
        assert!(lines[2].starts_with("<tr><td>Milk</td><td>1"));
        assert!(lines[2].ends_with("<td>0.95</td></tr>"));
        assert_eq!(
            lines[3],
            r#"<tr id="total-row"><td colspan="2">Total: </td><td>2.95</td></tr>"#
        );
    }

    #[test]
    fn test_total_banner_when_cart_discounted() {
        let mut cart = Cart::default();
        cart.set_loyalty_card(true).unwrap();
        cart.add("Coffee", Decimal::new(1000, 2), None).unwrap();

        let html = render_html(&CartTable::from_cart(&cart));
        assert!(html.contains(
            r#"<td>9.80<span class="discount-banner">Discount applied!</span></td></tr>"#
        ));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut cart = Cart::default();
        cart.add("Fish & <Chips>", Decimal::new(500, 2), None).unwrap();

        let html = render_html(&CartTable::from_cart(&cart));
        assert!(html.contains("<td>Fish &amp; &lt;Chips&gt;</td>"));
        assert!(!html.contains("<Chips>"));
    }

    #[test]
    fn test_view_mirrors_markup_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cart.html");
        let mut view = HtmlView::with_output(&path);

        view.redraw(&CartTable::Empty).unwrap();

        assert_eq!(view.redraws(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), view.markup());
    }
}
