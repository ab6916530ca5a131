//! Diary entry operations

use chrono::NaiveDate;
use rusqlite::{params, Row};
use rust_decimal::Decimal;

use super::{date_column, decimal_column, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{DiaryEntry, NewDiaryEntry};

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<DiaryEntry> {
    Ok(DiaryEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        category: row.get(2)?,
        amount: decimal_column(row, 3)?,
        date: date_column(row, 4)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

impl Database {
    /// Insert a diary entry. Amounts are recorded expenses and must be
    /// non-negative; the category label is stored exactly as given.
    pub fn insert_entry(&self, entry: &NewDiaryEntry) -> Result<i64> {
        if entry.amount < Decimal::ZERO {
            return Err(Error::Validation(format!(
                "Entry amount must be non-negative, got {}",
                entry.amount
            )));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO diary_entries (user_id, category, amount, date) VALUES (?, ?, ?, ?)",
            params![
                entry.user_id,
                entry.category,
                entry.amount.to_string(),
                entry.date.to_string(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List a user's diary entries dated on or after `since` (inclusive),
    /// newest first.
    pub fn list_entries_since(&self, user_id: i64, since: NaiveDate) -> Result<Vec<DiaryEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, category, amount, date, created_at
             FROM diary_entries
             WHERE user_id = ? AND date >= ?
             ORDER BY date DESC, id DESC",
        )?;

        let entries = stmt
            .query_map(params![user_id, since.to_string()], entry_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}
