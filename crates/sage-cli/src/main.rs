//! Sage CLI - Personal finance diary with a snarky advisor
//!
//! Usage:
//!   sage init                     Initialize database
//!   sage user create --name ...   Register a user
//!   sage entry add --user 1 ...   Record an expense
//!   sage login --email ...        Get a bearer token
//!   sage advise --token JWT       Generate advice

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::User { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                UserAction::Create {
                    name,
                    email,
                    password,
                } => commands::cmd_user_create(&db, &name, &email, &password),
                UserAction::Show { user } => commands::cmd_user_show(&db, &user),
                UserAction::SetGoals {
                    user,
                    food_and_drink,
                    social_and_entertainment,
                    shopping,
                    holiday_and_travel,
                    health_and_beauty,
                    misc,
                    savings,
                    disposable_income,
                } => {
                    let update = sage_core::models::SpendingGoalsUpdate {
                        food_and_drink_goal: food_and_drink,
                        social_and_entertainment_goal: social_and_entertainment,
                        shopping_goal: shopping,
                        holiday_and_travel_goal: holiday_and_travel,
                        health_and_beauty_goal: health_and_beauty,
                        misc_goal: misc,
                        current_savings: savings,
                        disposable_income,
                    };
                    commands::cmd_user_set_goals(&db, user, &update)
                }
            }
        }
        Commands::Entry { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                EntryAction::Add {
                    user,
                    category,
                    amount,
                    date,
                } => commands::cmd_entry_add(&db, user, &category, amount, date),
                EntryAction::List { user, days } => commands::cmd_entry_list(&db, user, days),
            }
        }
        Commands::Goal { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                GoalAction::Add {
                    user,
                    title,
                    target,
                    end_date,
                } => commands::cmd_goal_add(&db, user, &title, target, end_date),
                GoalAction::List { user } => commands::cmd_goal_list(&db, user),
            }
        }
        Commands::Login { email, password } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            let auth = commands::auth_from_env()?;
            commands::cmd_login(&db, &auth, &email, &password)
        }
        Commands::Advise { token, user, json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            let auth = commands::auth_from_env()?;
            commands::cmd_advise(&db, &auth, token.as_deref(), user, json)
        }
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
    }
}
