// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for healthy-bytes
// ABOUTME: Provides consistent display of food items, totals, and resolution reports

use chrono::{DateTime, Local, Utc};
use healthy_bytes::{
    external::ProductRecord,
    models::{FoodItem, NutritionTotals},
    nutrition::ResolutionReport,
};

const RULE_WIDTH: usize = 80;

fn local_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Display a newly added item
pub fn display_added_item(item: &FoodItem) {
    println!("Added {} ({})", item.name, item.brand);
    println!("   Id: {}", item.id);
    println!("   Serving: {}", item.serving_size);
    println!("   Added: {}", local_time(item.added_at));
    println!(
        "   {} kcal | protein {} g | carbs {} g | fat {} g",
        item.nutrition.calories, item.nutrition.protein, item.nutrition.carbs, item.nutrition.fat
    );
}

/// Display the food list as a table
pub fn display_items(items: &[FoodItem]) {
    if items.is_empty() {
        println!("No food items yet. Add one with: healthy-bytes add <barcode>");
        return;
    }

    println!(
        "{:<44} {:<28} {:>8} {:>8} {:>8} {:>8}  {:<16}",
        "ID", "NAME", "KCAL", "PROT", "CARB", "FAT", "ADDED"
    );
    println!("{}", "=".repeat(RULE_WIDTH + 48));
    for item in items {
        println!(
            "{:<44} {:<28} {:>8.1} {:>8.1} {:>8.1} {:>8.1}  {:<16}",
            item.id,
            truncate(&item.name, 28),
            item.nutrition.calories,
            item.nutrition.protein,
            item.nutrition.carbs,
            item.nutrition.fat,
            local_time(item.added_at)
        );
    }
}

/// Display rounded totals
pub fn display_totals(totals: &NutritionTotals, item_count: usize) {
    println!("Nutrition Summary ({item_count} item(s))");
    println!("{}", "=".repeat(RULE_WIDTH / 2));
    println!("   Calories: {}", totals.calories);
    println!("   Protein:  {}g", totals.protein);
    println!("   Carbs:    {}g", totals.carbs);
    println!("   Fat:      {}g", totals.fat);
}

/// Display an offline resolution with the source of every value
pub fn display_report(product: &ProductRecord, serving_text: Option<&str>, report: &ResolutionReport) {
    println!(
        "{}",
        product.product_name.as_deref().unwrap_or("Unknown Product")
    );
    println!("{}", "=".repeat(RULE_WIDTH / 2));
    println!(
        "   Serving: {} -> {}",
        serving_text.unwrap_or("(none)"),
        report
            .serving_size
            .grams()
            .map_or_else(|| "unknown".to_owned(), |g| format!("{g} g"))
    );
    println!(
        "   Calories: {:>7.1} kcal  [{:?}]",
        report.nutrition.calories, report.calorie_source
    );
    println!(
        "   Protein:  {:>7.1} g     [{:?}]",
        report.nutrition.protein, report.protein_source
    );
    println!(
        "   Carbs:    {:>7.1} g     [{:?}]",
        report.nutrition.carbs, report.carbs_source
    );
    println!(
        "   Fat:      {:>7.1} g     [{:?}]",
        report.nutrition.fat, report.fat_source
    );
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
