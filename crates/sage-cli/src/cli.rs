//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Sage - Track your spending, get roasted for it
#[derive(Parser)]
#[command(name = "sage")]
#[command(about = "Self-hosted personal finance diary with a snarky advisor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "sage.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set SAGE_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage diary entries (recorded expenses)
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Manage savings goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Log in with email and password, printing a bearer token
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Generate financial advice for a user
    Advise {
        /// Bearer token identifying the caller (from `sage login`)
        #[arg(long, conflicts_with = "user")]
        token: Option<String>,

        /// User id to advise (local shortcut; issues a token internally)
        #[arg(long)]
        user: Option<i64>,

        /// Emit the advice as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show database status (encryption, size, row counts)
    Status,
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a new user
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address (unique)
        #[arg(long)]
        email: String,

        /// Password for token issuance
        #[arg(long)]
        password: String,
    },

    /// Show a user by id or email
    Show {
        /// User id or email address
        user: String,
    },

    /// Update spending goals and income figures (only given flags change)
    SetGoals {
        /// User id
        #[arg(long)]
        user: i64,

        /// Monthly budget goal for Food and Drink
        #[arg(long)]
        food_and_drink: Option<Decimal>,

        /// Monthly budget goal for Social and Entertainment
        #[arg(long)]
        social_and_entertainment: Option<Decimal>,

        /// Monthly budget goal for Shopping
        #[arg(long)]
        shopping: Option<Decimal>,

        /// Monthly budget goal for Holiday and Travel
        #[arg(long)]
        holiday_and_travel: Option<Decimal>,

        /// Monthly budget goal for Health and Beauty
        #[arg(long)]
        health_and_beauty: Option<Decimal>,

        /// Monthly budget goal for Misc
        #[arg(long)]
        misc: Option<Decimal>,

        /// Current account-wide savings balance
        #[arg(long)]
        savings: Option<Decimal>,

        /// Monthly disposable income
        #[arg(long)]
        disposable_income: Option<Decimal>,
    },
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Record an expense
    Add {
        /// User id
        #[arg(long)]
        user: i64,

        /// Category label (one of the six fixed categories)
        #[arg(long)]
        category: String,

        /// Amount spent
        #[arg(long)]
        amount: Decimal,

        /// Occurrence date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List recent entries
    List {
        /// User id
        #[arg(long)]
        user: i64,

        /// How many trailing days to show
        #[arg(long, default_value = "30")]
        days: i64,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a savings goal
    Add {
        /// User id
        #[arg(long)]
        user: i64,

        /// Goal title (appears in advice messages)
        #[arg(long)]
        title: String,

        /// Target amount
        #[arg(long)]
        target: Decimal,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        end_date: NaiveDate,
    },

    /// List savings goals
    List {
        /// User id
        #[arg(long)]
        user: i64,
    },
}
