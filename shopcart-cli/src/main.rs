//! Shopcart CLI - a shopping cart in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{init, products, quote, shop};

/// Environment variable holding the log filter
const LOG_ENV: &str = "SHOPCART_LOG";

/// shopcart - add products, watch the discounts apply
#[derive(Parser)]
#[command(name = "cart", version, about, long_about = None)]
struct Cli {
    /// Log cart activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products on offer
    Products {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price a cart in one go
    Quote {
        /// Products to add, by name or listing number (repeat to add more units)
        #[arg(required = true)]
        products: Vec<String>,
        /// Apply the loyalty card discount
        #[arg(long)]
        loyalty_card: bool,
        /// Output as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,
        /// Output the cart table as HTML rows
        #[arg(long)]
        html: bool,
    },

    /// Start an interactive shopping session
    Shop {
        /// Start with the loyalty card ticked
        #[arg(long)]
        loyalty_card: bool,
        /// Rewrite this file with the cart's HTML rows after every change
        #[arg(long)]
        html_out: Option<PathBuf>,
    },

    /// Write a default settings.json
    Init {
        /// Overwrite managed settings if the file already exists
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Products { json } => products::run(json),
        Commands::Quote { products, loyalty_card, json, html } => {
            quote::run(&products, loyalty_card, json, html)
        }
        Commands::Shop { loyalty_card, html_out } => shop::run(loyalty_card, html_out),
        Commands::Init { force } => init::run(force),
    }
}
