//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `auth_from_env` - Shared utility to load the token signing keys
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use sage_core::auth::AuthKeys;
use sage_core::db::Database;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path.to_str().context("Database path is not valid UTF-8")?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

/// Load token signing keys from SAGE_JWT_SECRET
pub fn auth_from_env() -> Result<AuthKeys> {
    AuthKeys::from_env().context("Failed to load token signing keys")
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let _db = open_db(db_path, no_encrypt)?;

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Create a user: sage user create --name You --email you@example.com --password ...");
    println!("  2. Record an expense: sage entry add --user 1 --category \"Food and Drink\" --amount 12.50");
    println!("  3. Get advice: sage advise --user 1");

    Ok(())
}
