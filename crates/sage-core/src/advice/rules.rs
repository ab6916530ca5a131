//! Advice rules
//!
//! Three rule families, evaluated in a fixed order that the formatter
//! preserves: category overspend, savings-goal pace, burn rate. All
//! comparisons are strict; a value sitting exactly on a threshold is fine.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{Error, Result};
use crate::models::{Category, SavingsGoal, User};

use super::aggregate::SpendingTotals;
use super::messages;

/// A category total may exceed its budget goal by up to 20% before the
/// overspend rule fires
pub const OVERSPEND_MULTIPLIER: Decimal = dec!(1.2);

/// Savings goals closer than this many days to their deadline are pace-checked
pub const PACE_WINDOW_DAYS: i64 = 30;

/// Minimum progress percentage a nearly-due savings goal must have
pub const PACE_MIN_PROGRESS: Decimal = dec!(50);

/// Share of disposable income the 30-day total spend may reach before the
/// burn-rate rule fires
pub const BURN_RATE_THRESHOLD: Decimal = dec!(0.8);

const HUNDRED: Decimal = dec!(100);

/// Identifies which rule family produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    CategoryOverspend,
    SavingsPace,
    BurnRate,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::CategoryOverspend => "category_overspend",
            RuleKind::SavingsPace => "savings_pace",
            RuleKind::BurnRate => "burn_rate",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One unit of generated advice. Transient: produced, formatted, discarded.
#[derive(Debug, Clone)]
pub struct Finding {
    pub rule: RuleKind,
    pub message: String,
}

impl Finding {
    pub fn new(rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// Everything a rule may look at: the user snapshot, the aggregated
/// spending window, the savings goals, and the evaluation clock.
pub struct RuleContext<'a> {
    pub user: &'a User,
    pub totals: &'a SpendingTotals,
    pub savings_goals: &'a [SavingsGoal],
    pub now: DateTime<Utc>,
}

/// Trait for advice rule families
pub trait AdviceRule: Send + Sync {
    /// Which rule family this is
    fn id(&self) -> RuleKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate against the context and produce findings
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Finding>>;
}

/// Days from `now` until midnight at the start of `end_date`, rounded up.
/// Negative once the deadline has passed.
fn days_until(end_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let end = end_date.and_time(chrono::NaiveTime::MIN).and_utc();
    let secs = (end - now).num_seconds();
    // Ceiling division: any partial day counts as a full day remaining
    (secs + 86_399).div_euclid(86_400)
}

/// Fires per category when its 30-day total exceeds the budget goal by
/// more than 20%. A category with no goal and no spend can never trigger.
pub struct CategoryOverspendRule;

impl AdviceRule for CategoryOverspendRule {
    fn id(&self) -> RuleKind {
        RuleKind::CategoryOverspend
    }

    fn name(&self) -> &'static str {
        "Category overspend"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for category in Category::ALL {
            let spent = ctx.totals.category_total(category);
            let goal = ctx.user.budget_goal(category);

            if spent > goal * OVERSPEND_MULTIPLIER {
                findings.push(Finding::new(
                    RuleKind::CategoryOverspend,
                    messages::overspend_message(category),
                ));
            }
        }

        Ok(findings)
    }
}

/// Fires per savings goal that is nearly due (or past due) with less than
/// half its target saved. Progress is judged against the user's account-wide
/// savings balance, so several goals share one progress figure.
pub struct SavingsPaceRule;

impl SavingsPaceRule {
    fn check_goal(
        goal: &SavingsGoal,
        current_savings: Decimal,
        now: DateTime<Utc>,
    ) -> Result<Option<Finding>> {
        if goal.target <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "Savings goal '{}' has a non-positive target ({})",
                goal.title, goal.target
            )));
        }

        let days_remaining = days_until(goal.end_date, now);
        let progress = current_savings / goal.target * HUNDRED;

        if days_remaining < PACE_WINDOW_DAYS && progress < PACE_MIN_PROGRESS {
            Ok(Some(Finding::new(
                RuleKind::SavingsPace,
                messages::savings_pace_message(&goal.title),
            )))
        } else {
            Ok(None)
        }
    }
}

impl AdviceRule for SavingsPaceRule {
    fn id(&self) -> RuleKind {
        RuleKind::SavingsPace
    }

    fn name(&self) -> &'static str {
        "Savings goal pace"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for goal in ctx.savings_goals {
            // A malformed goal skips only itself; the rest still get checked
            match Self::check_goal(goal, ctx.user.current_savings, ctx.now) {
                Ok(Some(finding)) => findings.push(finding),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(goal = %goal.title, error = %e, "Skipping malformed savings goal");
                }
            }
        }

        Ok(findings)
    }
}

/// Fires once when total 30-day spend exceeds 80% of monthly disposable
/// income.
pub struct BurnRateRule;

impl AdviceRule for BurnRateRule {
    fn id(&self) -> RuleKind {
        RuleKind::BurnRate
    }

    fn name(&self) -> &'static str {
        "Burn rate"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Finding>> {
        let total = ctx.totals.total_spend();
        let limit = ctx.user.disposable_income * BURN_RATE_THRESHOLD;

        if total > limit {
            Ok(vec![Finding::new(
                RuleKind::BurnRate,
                messages::BURN_RATE_WARNING,
            )])
        } else {
            Ok(vec![])
        }
    }
}
