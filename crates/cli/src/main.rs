//! Larek CLI - catalog listing and headless checkout.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! larek-cli catalog
//!
//! # Place an order
//! larek-cli order -p 854cef69-976d-4c2a-a18c-2aa45046c390 \
//!     --payment card --address "123 Main St" \
//!     --email a@b.co --phone "+1 555-123-4567"
//!
//! # Validate without submitting
//! larek-cli order -p 854cef69-976d-4c2a-a18c-2aa45046c390 ... --dry-run
//! ```
//!
//! # Environment Variables
//!
//! - `LAREK_API_URL` - Base URL of the catalog/order API
//! - `LAREK_CDN_URL` - Base URL for product images

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "larek-cli")]
#[command(author, version, about = "Larek catalog and checkout tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in the catalog
    Catalog {
        /// Print the raw product list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Put products in a cart and check out
    Order(commands::order::OrderArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Catalog { json } => commands::catalog::list(json).await,
        Commands::Order(args) => commands::order::run(&args).await,
    }
}
