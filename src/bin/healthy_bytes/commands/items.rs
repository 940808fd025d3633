// ABOUTME: Food list commands for healthy-bytes
// ABOUTME: Handles add, scan, list, summary, remove, and clear against the persisted ledger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use healthy_bytes::{
    errors::{AppError, AppResult},
    models::Barcode,
    scanner::LineSource,
    session::ScanOutcome,
};
use tokio::io::{stdin, BufReader};
use tracing::{info, warn};

use crate::helpers::display::{display_added_item, display_items, display_totals};
use crate::CliSession;

type Result<T> = AppResult<T>;

/// Look up and add one barcode
pub async fn add(session: &mut CliSession, raw_barcode: &str) -> Result<()> {
    let barcode = Barcode::parse(raw_barcode)?;
    let outcome = session.add_barcode(&barcode).await.inspect_err(|e| {
        if e.is_retryable() {
            warn!("Lookup failed temporarily; try again in a moment");
        }
    })?;
    report_outcome(&outcome);
    Ok(())
}

/// Confirm a barcode from stdin detections, then add it
pub async fn scan(session: &mut CliSession) -> Result<()> {
    info!("Reading detections from stdin");
    let mut source = LineSource::new(BufReader::new(stdin()));
    match session.scan_and_add(&mut source).await? {
        Some(outcome) => report_outcome(&outcome),
        None => println!("No barcode confirmed before input ended."),
    }
    Ok(())
}

fn report_outcome(outcome: &ScanOutcome) {
    match outcome {
        ScanOutcome::Added(item) => display_added_item(item),
        ScanOutcome::NotFound(barcode) => {
            println!("Product not found for barcode {barcode}.");
        }
    }
}

/// Print the food list
pub fn list(session: &CliSession, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session.items())?);
    } else {
        display_items(session.items());
    }
    Ok(())
}

/// Print nutrition totals
pub fn summary(session: &CliSession, json: bool) -> Result<()> {
    let totals = session.totals().rounded_for_display();
    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
    } else {
        display_totals(&totals, session.items().len());
    }
    Ok(())
}

/// Remove one item by id
pub async fn remove(session: &mut CliSession, id: &str) -> Result<()> {
    let removed = session
        .remove_item(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Food item {id}")))?;
    println!("Removed {} ({}).", removed.name, removed.id);
    Ok(())
}

/// Remove every item
pub async fn clear(session: &mut CliSession) -> Result<()> {
    let count = session.items().len();
    session.clear().await?;
    println!("Removed {count} item(s).");
    Ok(())
}
