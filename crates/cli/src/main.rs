//! Shopmaster CLI - browse the catalog, manage the cart, check out.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! shopmaster products list
//! shopmaster products show 7
//!
//! # Manage the cart (persisted across runs)
//! shopmaster cart add 7 --quantity 2
//! shopmaster cart update 7 -- -1
//! shopmaster cart remove 7
//! shopmaster cart show
//! shopmaster cart clear
//!
//! # Simulate checkout and print the ticket
//! shopmaster checkout --name "Ana Bolivar" --save
//! ```
//!
//! # Commands
//!
//! - `products` - List or inspect catalog products
//! - `cart` - Mutate and display the persistent cart
//! - `checkout` - Produce a receipt ticket and empty the cart

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::sync::Arc;

use clap::{Parser, Subcommand};

use shopmaster_storefront::{Storefront, StorefrontConfig, TracingNotifier};

mod commands;

#[derive(Parser)]
#[command(name = "shopmaster")]
#[command(author, version, about = "Shopmaster storefront demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Simulate checkout and print the receipt ticket
    Checkout {
        /// Customer name printed on the ticket
        #[arg(short, long)]
        name: String,

        /// Also write the ticket to a file in the working directory
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List all catalog products
    List,
    /// Show one product in detail
    Show {
        /// Catalog product ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Catalog product ID
        id: i64,

        /// Units to add
        #[arg(short, long, default_value = "1")]
        quantity: String,
    },
    /// Change the quantity of a cart line by a signed delta
    Update {
        /// Catalog product ID
        id: i64,

        /// Signed quantity change (e.g. 1 or -1)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product ID
        id: i64,
    },
    /// Display the cart contents and totals
    Show,
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut storefront = Storefront::new(config, Arc::new(TracingNotifier));

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(&storefront).await?,
            ProductsAction::Show { id } => commands::products::show(&storefront, id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add { id, quantity } => {
                commands::cart::add(&mut storefront, id, &quantity).await?;
            }
            CartAction::Update { id, delta } => {
                commands::cart::update(&mut storefront, id, delta)?;
            }
            CartAction::Remove { id } => commands::cart::remove(&mut storefront, id)?,
            CartAction::Show => commands::cart::show(&storefront),
            CartAction::Clear => commands::cart::clear(&mut storefront)?,
        },
        Commands::Checkout { name, save } => {
            commands::checkout::run(&mut storefront, &name, save)?;
        }
    }
    Ok(())
}
