//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init) and shared utilities (open_db, auth_from_env)
//! - `users` - User management commands (create, show, set-goals)
//! - `entries` - Diary entry commands (add, list)
//! - `goals` - Savings goal commands (add, list)
//! - `advice` - Login and advice generation
//! - `status` - Database status command

pub mod advice;
pub mod core;
pub mod entries;
pub mod goals;
pub mod status;
pub mod users;

// Re-export command functions for main.rs
pub use advice::*;
pub use core::*;
pub use entries::*;
pub use goals::*;
pub use status::*;
pub use users::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
