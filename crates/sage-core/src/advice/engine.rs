//! Advice engine - loads context, runs the rules, formats the output

use chrono::{DateTime, Duration, Utc};

use crate::auth::AuthKeys;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{DiaryEntry, SavingsGoal, User};

use super::aggregate::SpendingTotals;
use super::format::format_advice;
use super::rules::{
    AdviceRule, BurnRateRule, CategoryOverspendRule, Finding, RuleContext, RuleKind,
    SavingsPaceRule,
};

/// Diary entries are considered for this many trailing days
pub const ADVICE_WINDOW_DAYS: i64 = 30;

/// Everything one advice invocation works from: a read-only snapshot,
/// fetched once, discarded afterwards.
pub struct AdviceContext {
    pub user: User,
    pub entries: Vec<DiaryEntry>,
    pub savings_goals: Vec<SavingsGoal>,
    /// Evaluation clock; the window and goal deadlines are judged against it
    pub now: DateTime<Utc>,
}

/// The advice engine: verifies the caller, loads their snapshot, and runs
/// the registered rules in a fixed order.
pub struct AdviceEngine {
    rules: Vec<Box<dyn AdviceRule>>,
}

impl Default for AdviceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdviceEngine {
    /// Create an engine with the built-in rules. Registration order is
    /// output order: overspend, savings pace, burn rate.
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(CategoryOverspendRule));
        engine.register(Box::new(SavingsPaceRule));
        engine.register(Box::new(BurnRateRule));

        engine
    }

    /// Register an advice rule
    pub fn register(&mut self, rule: Box<dyn AdviceRule>) {
        self.rules.push(rule);
    }

    /// Generate advice for the caller identified by `token`
    pub fn generate(&self, db: &Database, auth: &AuthKeys, token: &str) -> Result<Vec<String>> {
        self.generate_at(db, auth, token, Utc::now())
    }

    /// Generate advice with a pinned evaluation clock
    pub fn generate_at(
        &self,
        db: &Database,
        auth: &AuthKeys,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        let user_id = auth.verify_identity(token)?;
        let ctx = self.load_context(db, user_id, now)?;
        let findings = self.evaluate(&ctx);
        Ok(format_advice(findings))
    }

    /// Fetch the user, their trailing-window diary entries, and their
    /// savings goals. Read-once; no caching.
    pub fn load_context(
        &self,
        db: &Database,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> Result<AdviceContext> {
        let user = db
            .get_user_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(format!("No user with id {}", user_id)))?;

        let since = (now - Duration::days(ADVICE_WINDOW_DAYS)).date_naive();
        let entries = db.list_entries_since(user_id, since)?;
        let savings_goals = db.list_savings_goals(user_id)?;

        tracing::debug!(
            user_id,
            entries = entries.len(),
            goals = savings_goals.len(),
            "Advice context loaded"
        );

        Ok(AdviceContext {
            user,
            entries,
            savings_goals,
            now,
        })
    }

    /// Run all rules against the context and collect findings in
    /// registration order. A failed rule skips its contribution; the rest
    /// still run.
    pub fn evaluate(&self, ctx: &AdviceContext) -> Vec<Finding> {
        let totals = SpendingTotals::from_entries(&ctx.entries);
        let rule_ctx = RuleContext {
            user: &ctx.user,
            totals: &totals,
            savings_goals: &ctx.savings_goals,
            now: ctx.now,
        };

        let mut findings = vec![];

        for rule in &self.rules {
            match rule.evaluate(&rule_ctx) {
                Ok(produced) => {
                    tracing::debug!(
                        rule = rule.id().as_str(),
                        count = produced.len(),
                        "Rule evaluation complete"
                    );
                    findings.extend(produced);
                }
                Err(e) => {
                    tracing::warn!(
                        rule = rule.id().as_str(),
                        error = %e,
                        "Rule evaluation failed, skipping its findings"
                    );
                }
            }
        }

        findings
    }

    /// Get list of registered rule kinds
    pub fn rule_kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthKeys;
    use crate::models::NewDiaryEntry;
    use rust_decimal_macros::dec;

    fn test_auth() -> AuthKeys {
        AuthKeys::from_secret(b"engine-test-secret-engine-test!!")
    }

    #[test]
    fn test_engine_registers_rules_in_output_order() {
        let engine = AdviceEngine::new();
        assert_eq!(
            engine.rule_kinds(),
            vec![
                RuleKind::CategoryOverspend,
                RuleKind::SavingsPace,
                RuleKind::BurnRate
            ]
        );
    }

    #[test]
    fn test_generate_rejects_bad_token() {
        let db = Database::in_memory().unwrap();
        let engine = AdviceEngine::new();
        let err = engine.generate(&db, &test_auth(), "garbage").unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_generate_missing_user_is_not_found() {
        let db = Database::in_memory().unwrap();
        let auth = test_auth();
        let engine = AdviceEngine::new();

        let token = auth.issue_token(12345).unwrap();
        let err = engine.generate(&db, &auth, &token).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_window_excludes_old_entries() {
        let db = Database::in_memory().unwrap();
        let auth = test_auth();
        let engine = AdviceEngine::new();

        let user_id = db.create_user("Ada", "ada@example.com", "h").unwrap();
        db.update_spending_goals(
            user_id,
            &crate::models::SpendingGoalsUpdate {
                food_and_drink_goal: Some(dec!(100)),
                disposable_income: Some(dec!(10000)),
                ..Default::default()
            },
        )
        .unwrap();

        let now = chrono::Utc::now();
        // Heavy spending, but 40 days ago: outside the window
        db.insert_entry(&NewDiaryEntry {
            user_id,
            category: "Food and Drink".to_string(),
            amount: dec!(500),
            date: (now - Duration::days(40)).date_naive(),
        })
        .unwrap();

        let token = auth.issue_token(user_id).unwrap();
        let advice = engine.generate_at(&db, &auth, &token, now).unwrap();
        assert_eq!(advice, vec![super::super::messages::ALL_CLEAR.to_string()]);
    }
}
