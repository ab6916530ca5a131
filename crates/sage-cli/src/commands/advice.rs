//! Login and advice generation command implementations

use anyhow::{bail, Context, Result};
use sage_core::advice::AdviceEngine;
use sage_core::auth::{self, AuthKeys};
use sage_core::db::Database;

pub fn cmd_login(db: &Database, keys: &AuthKeys, email: &str, password: &str) -> Result<()> {
    let Some((user_id, stored_hash)) = db.get_credentials(email)? else {
        bail!("No user with email {}", email);
    };
    auth::verify_password(password, &stored_hash).context("Login failed")?;

    let token = keys.issue_token(user_id)?;
    let hours = keys.token_ttl().as_secs() / 3600;

    println!("🔑 Token for {} (valid for {}h):", email, hours);
    println!("{}", token);
    Ok(())
}

pub fn cmd_advise(
    db: &Database,
    keys: &AuthKeys,
    token: Option<&str>,
    user_id: Option<i64>,
    json: bool,
) -> Result<()> {
    // Local shortcut: --user issues a token for itself, so the engine's
    // verify-then-load path is exercised either way
    let issued;
    let token = match (token, user_id) {
        (Some(t), _) => t,
        (None, Some(id)) => {
            issued = keys.issue_token(id)?;
            issued.as_str()
        }
        (None, None) => bail!("Provide --token (from `sage login`) or --user"),
    };

    let engine = AdviceEngine::new();
    let advice = engine
        .generate(db, keys, token)
        .context("Advice generation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    println!();
    println!("💡 Sage says:");
    for line in &advice {
        println!("   • {}", line);
    }
    println!();
    Ok(())
}
