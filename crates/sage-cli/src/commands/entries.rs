//! Diary entry command implementations

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sage_core::db::Database;
use sage_core::models::{Category, NewDiaryEntry};

use super::truncate;

pub fn cmd_entry_add(
    db: &Database,
    user_id: i64,
    category: &str,
    amount: Decimal,
    date: Option<NaiveDate>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());

    let entry = NewDiaryEntry {
        user_id,
        category: category.to_string(),
        amount,
        date,
    };
    let entry_id = db.insert_entry(&entry).context("Failed to record entry")?;

    println!("✅ Recorded entry {}: {} on {} ({})", entry_id, amount, date, category);

    // The engine tolerates any label, but typos never count toward a budget
    if Category::parse(category).is_none() {
        println!(
            "   ⚠️  '{}' is not one of the six budget categories; it won't count toward a category goal",
            category
        );
    }
    Ok(())
}

pub fn cmd_entry_list(db: &Database, user_id: i64, days: i64) -> Result<()> {
    let since = (Utc::now() - chrono::Duration::days(days)).date_naive();
    let entries = db.list_entries_since(user_id, since)?;

    if entries.is_empty() {
        println!("No entries in the last {} days", days);
        return Ok(());
    }

    println!();
    println!("📒 Diary entries since {} ({} total)", since, entries.len());
    println!("   ─────────────────────────────────────────────");

    let mut total = Decimal::ZERO;
    for entry in &entries {
        println!(
            "   {}  {:<26} {:>10}",
            entry.date,
            truncate(&entry.category, 26),
            entry.amount
        );
        total += entry.amount;
    }

    println!("   ─────────────────────────────────────────────");
    println!("   {:<38} {:>10}", "Total", total);
    println!();
    Ok(())
}
