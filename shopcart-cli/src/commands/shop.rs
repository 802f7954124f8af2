//! Shop command - interactive shopping session
//!
//! Reads one command per line, from a prompt on a terminal or from piped
//! stdin, and redraws the cart after every change.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::Input;

use rust_decimal::Decimal;
use shopcart_core::adapters::html::{render_html, HtmlView};
use shopcart_core::domain::money::parse_price;
use shopcart_core::{Cart, ShopContext};

use super::load_config;
use crate::output::{self, TerminalView};

/// A single line typed into the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Show the catalog
    List,
    /// Add a catalog product by name or number
    Add(String),
    /// Add a product that is not in the catalog
    Custom {
        name: String,
        price: Decimal,
        offer_code: Option<String>,
    },
    /// "+" on a cart row
    Increment(String),
    /// "-" on a cart row
    Decrement(String),
    /// Tick or untick the loyalty card
    Loyalty(bool),
    Empty,
    Show,
    Html,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line; blank lines and `#` comments give `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.chars().next() {
            Some(c @ ('+' | '-')) => (&line[..1], line[c.len_utf8()..].trim()),
            _ => match line.split_once(char::is_whitespace) {
                Some((verb, rest)) => (verb, rest.trim()),
                None => (line, ""),
            },
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" | "products" => SessionCommand::List,
            "add" | "a" => SessionCommand::Add(required(verb, rest)?),
            "custom" => parse_custom(rest)?,
            "+" | "inc" => SessionCommand::Increment(required(verb, rest)?),
            "-" | "dec" | "remove" | "rm" => SessionCommand::Decrement(required(verb, rest)?),
            "loyalty" => SessionCommand::Loyalty(parse_toggle(rest)?),
            "empty" | "clear" => SessionCommand::Empty,
            "show" => SessionCommand::Show,
            "html" => SessionCommand::Html,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => bail!("Unknown command '{}'. Type 'help' for a list of commands.", other),
        };

        Ok(Some(command))
    }
}

fn required(verb: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("'{}' needs a product name", verb);
    }
    Ok(rest.to_string())
}

/// `<name>, <price>[, <offer code>]`
fn parse_custom(rest: &str) -> Result<SessionCommand> {
    let parts: Vec<&str> = rest.split(',').map(str::trim).collect();
    let (name, price, offer_code) = match parts.as_slice() {
        [name, price] => (*name, *price, None),
        [name, price, offer] if !offer.is_empty() => (*name, *price, Some(offer.to_string())),
        _ => bail!("Usage: custom <name>, <price>[, <offer code>]"),
    };

    Ok(SessionCommand::Custom {
        name: name.to_string(),
        price: parse_price(price)?,
        offer_code,
    })
}

fn parse_toggle(s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        _ => bail!("Usage: loyalty on|off"),
    }
}

/// Match a typed name to a cart line, ignoring case
fn resolve_line(cart: &Cart, name: &str) -> String {
    cart.contents()
        .iter()
        .find(|item| item.name().eq_ignore_ascii_case(name))
        .map(|item| item.name().to_string())
        .unwrap_or_else(|| name.to_string())
}

pub fn run(loyalty_card: bool, html_out: Option<PathBuf>) -> Result<()> {
    let mut config = load_config()?;
    config.loyalty_card |= loyalty_card;

    let html = html_out.map(HtmlView::with_output);
    let mut ctx = ShopContext::with_config(config, Box::new(TerminalView::new(html)))?;

    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        print_catalog(&ctx);
        output::info("Type 'help' for commands.");
    }

    // dialoguer reads stdin itself, so only lock it for piped input
    let mut piped = if interactive {
        None
    } else {
        Some(io::stdin().lock().lines())
    };

    loop {
        let line = if interactive {
            match Input::<String>::new()
                .with_prompt("cart")
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(_) => break,
            }
        } else {
            match piped.as_mut().and_then(|lines| lines.next()) {
                Some(line) => line?,
                None => break,
            }
        };

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                output::error(&e.to_string());
                continue;
            }
        };

        if command == SessionCommand::Quit {
            break;
        }

        if let Err(e) = execute(&mut ctx, command) {
            output::error(&format!("{:#}", e));
        }
    }

    let cart = ctx.cart_service.cart();
    if !cart.is_empty() {
        println!(
            "{} {} item(s), total {}",
            "Checkout:".bold(),
            cart.unit_count(),
            cart.total()
        );
    }
    Ok(())
}

fn execute(ctx: &mut ShopContext, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::List => print_catalog(ctx),
        SessionCommand::Add(reference) => ctx.add_to_cart(&reference)?,
        SessionCommand::Custom { name, price, offer_code } => {
            ctx.cart_service.add(&name, price, offer_code.as_deref())?
        }
        SessionCommand::Increment(name) => {
            let name = resolve_line(ctx.cart_service.cart(), &name);
            ctx.cart_service.increment(&name)?;
        }
        SessionCommand::Decrement(name) => {
            let name = resolve_line(ctx.cart_service.cart(), &name);
            if !ctx.cart_service.remove(&name)? {
                output::warning(&format!("'{}' is not in the cart", name));
            }
        }
        SessionCommand::Loyalty(on) => ctx.cart_service.set_loyalty_card(on)?,
        SessionCommand::Empty => ctx.cart_service.empty_cart()?,
        SessionCommand::Show => ctx.cart_service.update_cart()?,
        SessionCommand::Html => println!("{}", render_html(&ctx.cart_service.table())),
        SessionCommand::Help => print_help(),
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn print_catalog(ctx: &ShopContext) {
    println!("{}", output::catalog_table(ctx.catalog()));
}

fn print_help() {
    println!("{}", "Commands".bold());
    println!("  list                 show the products on offer");
    println!("  add <product|#>      add one unit of a product");
    println!("  custom <name>, <price>[, <offer>]");
    println!("                       add a product that is not listed");
    println!("  + <name>             one more unit of a cart line");
    println!("  - <name>             one unit fewer (removes the line at zero)");
    println!("  loyalty on|off       tick or untick the loyalty card");
    println!("  empty                remove everything");
    println!("  show                 redraw the cart");
    println!("  html                 print the cart as HTML table rows");
    println!("  quit                 leave the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(parse("add Bread"), SessionCommand::Add("Bread".to_string()));
        assert_eq!(parse("  a   2 "), SessionCommand::Add("2".to_string()));
        assert_eq!(parse("ADD Red Wine"), SessionCommand::Add("Red Wine".to_string()));
    }

    #[test]
    fn test_parse_row_controls() {
        assert_eq!(parse("+ Bread"), SessionCommand::Increment("Bread".to_string()));
        assert_eq!(parse("+Bread"), SessionCommand::Increment("Bread".to_string()));
        assert_eq!(parse("- Milk"), SessionCommand::Decrement("Milk".to_string()));
        assert_eq!(parse("rm Milk"), SessionCommand::Decrement("Milk".to_string()));
    }

    #[test]
    fn test_parse_custom() {
        assert_eq!(
            parse("custom Fish Pie, 4.50, bogof"),
            SessionCommand::Custom {
                name: "Fish Pie".to_string(),
                price: Decimal::new(450, 2),
                offer_code: Some("bogof".to_string()),
            }
        );
        assert_eq!(
            parse("custom Jam,2"),
            SessionCommand::Custom {
                name: "Jam".to_string(),
                price: Decimal::new(2, 0),
                offer_code: None,
            }
        );
        assert!(SessionCommand::parse("custom Jam").is_err());
        assert!(SessionCommand::parse("custom Jam, cheap").is_err());
        assert!(SessionCommand::parse("custom Jam, -2").is_err());
    }

    #[test]
    fn test_parse_loyalty() {
        assert_eq!(parse("loyalty on"), SessionCommand::Loyalty(true));
        assert_eq!(parse("loyalty OFF"), SessionCommand::Loyalty(false));
        assert!(SessionCommand::parse("loyalty maybe").is_err());
    }

    #[test]
    fn test_parse_blank_and_comments() {
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
        assert_eq!(SessionCommand::parse("# add Bread").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(SessionCommand::parse("add").is_err());
        assert!(SessionCommand::parse("+").is_err());
        assert!(SessionCommand::parse("checkout").is_err());
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(parse("list"), SessionCommand::List);
        assert_eq!(parse("empty"), SessionCommand::Empty);
        assert_eq!(parse("show"), SessionCommand::Show);
        assert_eq!(parse("html"), SessionCommand::Html);
        assert_eq!(parse("?"), SessionCommand::Help);
        assert_eq!(parse("exit"), SessionCommand::Quit);
    }

    #[test]
    fn test_resolve_line_ignores_case() {
        let mut cart = Cart::default();
        cart.add("Bread", Decimal::new(100, 2), Some("bogof")).unwrap();

        assert_eq!(resolve_line(&cart, "bread"), "Bread");
        assert_eq!(resolve_line(&cart, "Milk"), "Milk");
    }
}
