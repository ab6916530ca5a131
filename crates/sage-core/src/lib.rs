//! Sage Core Library
//!
//! Shared functionality for the Sage personal finance diary:
//! - Database access and migrations
//! - User, diary-entry, and savings-goal models
//! - Bearer-token identity (issue/verify) and password hashing
//! - The advice generation engine (aggregation, rule evaluation, formatting)

pub mod advice;
pub mod auth;
pub mod db;
pub mod error;
pub mod models;

pub use advice::{format_advice, AdviceEngine, Finding, RuleKind, SpendingTotals};
pub use auth::AuthKeys;
pub use db::Database;
pub use error::{Error, Result};
pub use models::{Category, DiaryEntry, NewDiaryEntry, NewSavingsGoal, SavingsGoal, User};
