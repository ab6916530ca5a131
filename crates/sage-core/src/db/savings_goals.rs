//! Savings goal operations

use rusqlite::{params, Row};
use rust_decimal::Decimal;

use super::{date_column, decimal_column, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewSavingsGoal, SavingsGoal};

fn goal_from_row(row: &Row<'_>) -> rusqlite::Result<SavingsGoal> {
    Ok(SavingsGoal {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        target: decimal_column(row, 3)?,
        end_date: date_column(row, 4)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

impl Database {
    /// Insert a savings goal. The target must be positive; progress against
    /// a zero or negative target is meaningless.
    pub fn insert_savings_goal(&self, goal: &NewSavingsGoal) -> Result<i64> {
        if goal.target <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "Savings goal target must be positive, got {}",
                goal.target
            )));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO savings_goals (user_id, title, target, end_date) VALUES (?, ?, ?, ?)",
            params![
                goal.user_id,
                goal.title,
                goal.target.to_string(),
                goal.end_date.to_string(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List a user's savings goals, soonest deadline first
    pub fn list_savings_goals(&self, user_id: i64) -> Result<Vec<SavingsGoal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, title, target, end_date, created_at
             FROM savings_goals
             WHERE user_id = ?
             ORDER BY end_date ASC, id ASC",
        )?;

        let goals = stmt
            .query_map(params![user_id], goal_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insert_and_list_goals() {
        let db = Database::in_memory().unwrap();
        let user = db.create_user("Ada", "ada@example.com", "h").unwrap();

        db.insert_savings_goal(&NewSavingsGoal {
            user_id: user,
            title: "Holiday".to_string(),
            target: dec!(1000),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        })
        .unwrap();
        db.insert_savings_goal(&NewSavingsGoal {
            user_id: user,
            title: "New Laptop".to_string(),
            target: dec!(1500),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        })
        .unwrap();

        let goals = db.list_savings_goals(user).unwrap();
        assert_eq!(goals.len(), 2);
        // Soonest deadline first
        assert_eq!(goals[0].title, "New Laptop");
        assert_eq!(goals[1].target, dec!(1000));
    }

    #[test]
    fn test_goals_scoped_by_user() {
        let db = Database::in_memory().unwrap();
        let ada = db.create_user("Ada", "ada@example.com", "h").unwrap();
        let bob = db.create_user("Bob", "bob@example.com", "h").unwrap();

        db.insert_savings_goal(&NewSavingsGoal {
            user_id: bob,
            title: "Car".to_string(),
            target: dec!(5000),
            end_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        })
        .unwrap();

        assert!(db.list_savings_goals(ada).unwrap().is_empty());
        assert_eq!(db.list_savings_goals(bob).unwrap().len(), 1);
    }

    #[test]
    fn test_non_positive_target_rejected() {
        let db = Database::in_memory().unwrap();
        let user = db.create_user("Ada", "ada@example.com", "h").unwrap();

        let goal = NewSavingsGoal {
            user_id: user,
            title: "Broken".to_string(),
            target: Decimal::ZERO,
            end_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        };
        assert!(matches!(
            db.insert_savings_goal(&goal),
            Err(Error::Validation(_))
        ));
    }
}
