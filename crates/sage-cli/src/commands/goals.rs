//! Savings goal command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sage_core::db::Database;
use sage_core::models::NewSavingsGoal;

pub fn cmd_goal_add(
    db: &Database,
    user_id: i64,
    title: &str,
    target: Decimal,
    end_date: NaiveDate,
) -> Result<()> {
    let goal = NewSavingsGoal {
        user_id,
        title: title.to_string(),
        target,
        end_date,
    };
    let goal_id = db
        .insert_savings_goal(&goal)
        .context("Failed to add savings goal")?;

    println!("✅ Added savings goal {}: {} ({} by {})", goal_id, title, target, end_date);
    Ok(())
}

pub fn cmd_goal_list(db: &Database, user_id: i64) -> Result<()> {
    let goals = db.list_savings_goals(user_id)?;

    if goals.is_empty() {
        println!("No savings goals yet. Add one with: sage goal add --user {} --title ... --target ... --end-date ...", user_id);
        return Ok(());
    }

    println!();
    println!("🎯 Savings goals ({})", goals.len());
    println!("   ─────────────────────────────────────────────");
    for goal in &goals {
        println!(
            "   {:<24} {:>10}  by {}",
            goal.title, goal.target, goal.end_date
        );
    }
    println!();
    Ok(())
}
