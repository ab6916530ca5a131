//! Advice Generation Engine
//!
//! Ingests a user's recent diary entries, budget goals, and savings goals,
//! and deterministically derives a prioritized list of advisory messages.
//! Four stages, run in order with no feedback loops:
//!
//! 1. **Context loading** - resolve the caller's token to a user and fetch
//!    their 30-day entry window and savings goals
//! 2. **Aggregation** - reduce entries to per-category totals and a grand total
//! 3. **Rule evaluation** - overspend, savings pace, and burn-rate rules
//! 4. **Formatting** - final message strings, or a single "all clear"
//!
//! Everything after the fetch is pure and synchronous.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sage_core::{AdviceEngine, AuthKeys, Database};
//!
//! let engine = AdviceEngine::new();
//! let advice = engine.generate(&db, &auth, bearer_token)?;
//! ```

pub mod aggregate;
pub mod engine;
pub mod format;
pub mod messages;
pub mod rules;

pub use aggregate::SpendingTotals;
pub use engine::{AdviceContext, AdviceEngine, ADVICE_WINDOW_DAYS};
pub use format::format_advice;
pub use rules::{
    AdviceRule, BurnRateRule, CategoryOverspendRule, Finding, RuleContext, RuleKind,
    SavingsPaceRule, BURN_RATE_THRESHOLD, OVERSPEND_MULTIPLIER, PACE_MIN_PROGRESS,
    PACE_WINDOW_DAYS,
};
