//! User management command implementations

use anyhow::{bail, Context, Result};
use sage_core::auth;
use sage_core::db::Database;
use sage_core::models::{Category, SpendingGoalsUpdate, User};

pub fn cmd_user_create(db: &Database, name: &str, email: &str, password: &str) -> Result<()> {
    if password.len() < 8 {
        bail!("Password must be at least 8 characters");
    }

    let password_hash = auth::hash_password(password)?;
    let user_id = db
        .create_user(name, email, &password_hash)
        .context("Failed to create user (is the email already registered?)")?;

    println!("✅ Created user {} ({})", user_id, email);
    println!();
    println!("Set spending goals with: sage user set-goals --user {} --food-and-drink 100 ...", user_id);
    Ok(())
}

/// Show a user by numeric id or by email
pub fn cmd_user_show(db: &Database, id_or_email: &str) -> Result<()> {
    let user = match id_or_email.parse::<i64>() {
        Ok(id) => db.get_user_by_id(id)?,
        Err(_) => db.get_user_by_email(id_or_email)?,
    };

    let Some(user) = user else {
        bail!("No user matching '{}'", id_or_email);
    };

    print_user(&user);
    Ok(())
}

fn print_user(user: &User) {
    println!();
    println!("👤 {} (id {})", user.name, user.id);
    println!("   Email: {}", user.email);
    println!("   Member since: {}", user.created_at.format("%Y-%m-%d"));
    println!();
    println!("   Monthly budget goals:");
    for category in Category::ALL {
        println!("     {:<26} {:>10}", category.as_str(), user.budget_goal(category));
    }
    println!();
    println!("   Current savings:    {:>10}", user.current_savings);
    println!("   Disposable income:  {:>10}", user.disposable_income);
    println!();
}

pub fn cmd_user_set_goals(db: &Database, user_id: i64, update: &SpendingGoalsUpdate) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to update; pass at least one goal flag (see --help)");
    }

    db.update_spending_goals(user_id, update)
        .context("Failed to update spending goals")?;

    let user = db
        .get_user_by_id(user_id)?
        .context("User disappeared during update")?;

    println!("✅ Updated goals for {} (id {})", user.name, user.id);
    print_user(&user);
    Ok(())
}
