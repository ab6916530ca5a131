//! User operations

use rusqlite::{params, OptionalExtension, Row};

use super::{decimal_column, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{SpendingGoalsUpdate, User};

const USER_COLUMNS: &str = "id, name, email, food_and_drink_goal, social_and_entertainment_goal, \
     shopping_goal, holiday_and_travel_goal, health_and_beauty_goal, misc_goal, \
     current_savings, disposable_income, created_at";

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        food_and_drink_goal: decimal_column(row, 3)?,
        social_and_entertainment_goal: decimal_column(row, 4)?,
        shopping_goal: decimal_column(row, 5)?,
        holiday_and_travel_goal: decimal_column(row, 6)?,
        health_and_beauty_goal: decimal_column(row, 7)?,
        misc_goal: decimal_column(row, 8)?,
        current_savings: decimal_column(row, 9)?,
        disposable_income: decimal_column(row, 10)?,
        created_at: parse_datetime(&row.get::<_, String>(11)?),
    })
}

impl Database {
    /// Create a user. The password must already be hashed (see
    /// `auth::hash_password`); raw passwords never reach the database layer.
    pub fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)",
            params![name, email, password_hash],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
                params![id],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS),
                params![email],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }

    /// Look up login credentials: (user id, stored password hash)
    pub fn get_credentials(&self, email: &str) -> Result<Option<(i64, String)>> {
        let conn = self.conn()?;
        let creds = conn
            .query_row(
                "SELECT id, password_hash FROM users WHERE email = ?",
                params![email],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        Ok(creds)
    }

    /// Apply a partial spending-goals update. Only fields that are `Some`
    /// are written.
    pub fn update_spending_goals(&self, user_id: i64, update: &SpendingGoalsUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(Error::Validation(
                "No spending goal fields to update".to_string(),
            ));
        }

        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        let fields = [
            ("food_and_drink_goal", &update.food_and_drink_goal),
            (
                "social_and_entertainment_goal",
                &update.social_and_entertainment_goal,
            ),
            ("shopping_goal", &update.shopping_goal),
            ("holiday_and_travel_goal", &update.holiday_and_travel_goal),
            ("health_and_beauty_goal", &update.health_and_beauty_goal),
            ("misc_goal", &update.misc_goal),
            ("current_savings", &update.current_savings),
            ("disposable_income", &update.disposable_income),
        ];

        for (column, value) in fields {
            if let Some(amount) = value {
                sets.push(column);
                values.push(Box::new(amount.to_string()));
            }
        }

        let assignments: Vec<String> = sets.iter().map(|c| format!("{} = ?", c)).collect();
        let sql = format!("UPDATE users SET {} WHERE id = ?", assignments.join(", "));
        values.push(Box::new(user_id));

        let conn = self.conn()?;
        let value_refs: Vec<&dyn rusqlite::ToSql> = values.iter().map(|v| v.as_ref()).collect();
        let updated = conn.execute(&sql, value_refs.as_slice())?;

        if updated == 0 {
            return Err(Error::NotFound(format!("No user with id {}", user_id)));
        }
        Ok(())
    }
}
