// ABOUTME: Healthy Bytes CLI - barcode nutrition tracker for the terminal
// ABOUTME: Adds products by barcode or scanner input, lists items, and shows nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Add a product by barcode
//! healthy-bytes add 3017620422003
//!
//! # Pipe decoder output ("<code> <confidence>" per line) and add the first confirmed code
//! zbarcam --raw | healthy-bytes scan
//!
//! # Show items and totals
//! healthy-bytes list
//! healthy-bytes summary
//!
//! # Remove one item or everything
//! healthy-bytes remove item-2f1c...
//! healthy-bytes clear
//!
//! # Resolve a saved Open Food Facts product JSON offline
//! healthy-bytes resolve product.json --serving-size "2.5 oz (70g)"
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use healthy_bytes::{
    config::TrackerConfig,
    errors::{AppError, AppResult},
    external::OpenFoodFactsClient,
    ledger::JsonFileStore,
    logging::LoggingConfig,
    session::TrackerSession,
};
use tracing::debug;

type Result<T> = AppResult<T>;

/// Session type used by every ledger command
pub type CliSession = TrackerSession<OpenFoodFactsClient, JsonFileStore>;

#[derive(Parser)]
#[command(
    name = "healthy-bytes",
    version,
    about = "Barcode nutrition tracker",
    long_about = "Look up food products by barcode, resolve plausible calories and macros from \
                  Open Food Facts data, and keep a running list with nutrition totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the food list (overrides HEALTHY_BYTES_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Look up a barcode and add the product to the list
    Add {
        /// Product barcode (6-14 digits)
        barcode: String,
    },

    /// Read "<code> [confidence]" lines from stdin and add the first confirmed code
    Scan,

    /// List food items
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show nutrition totals
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Remove a food item by id
    Remove {
        /// Item id (item-...)
        id: String,
    },

    /// Remove every food item
    Clear,

    /// Resolve nutrition from a saved product or nutriments JSON file (no network)
    Resolve {
        /// JSON file: an API response, a product object, or a bare nutriments object
        file: PathBuf,

        /// Serving size text, overriding the one in the file
        #[arg(long)]
        serving_size: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    if let Command::Resolve { file, serving_size } = &cli.command {
        return commands::resolve::resolve_file(file, serving_size.as_deref()).await;
    }

    let mut config = TrackerConfig::from_env()?;
    if let Some(data_dir) = &cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    debug!(data_dir = %config.data_dir.display(), "Opening food list");

    let lookup = OpenFoodFactsClient::new(config.openfoodfacts.clone())?;
    let store = JsonFileStore::new(&config.data_dir);
    let mut session = TrackerSession::open(lookup, store, config.scanner).await?;

    match cli.command {
        Command::Add { barcode } => commands::items::add(&mut session, &barcode).await?,
        Command::Scan => commands::items::scan(&mut session).await?,
        Command::List { json } => commands::items::list(&session, json)?,
        Command::Summary { json } => commands::items::summary(&session, json)?,
        Command::Remove { id } => commands::items::remove(&mut session, &id).await?,
        Command::Clear => commands::items::clear(&mut session).await?,
        Command::Resolve { .. } => {}
    }

    Ok(())
}
