use chrono::NaiveDate;
use rusqlite::{params, Row};

use crate::db::{
    helpers::{parse_day, to_u32},
    Database, StoreError,
};
use crate::models::DayEntry;

fn row_to_entry(row: &Row) -> Result<DayEntry, StoreError> {
    let date: String = row.get("date")?;
    let steps: i64 = row.get("steps")?;

    Ok(DayEntry {
        date: parse_day(&date)?,
        steps: to_u32(steps, "steps")?,
    })
}

impl Database {
    /// Upsert the step total for one calendar day.
    ///
    /// The date must already be a plain calendar day; time-of-day cannot
    /// leak into a key by construction. Writing replaces an existing total
    /// for the same day, which is what the rollover path relies on when it
    /// retries a failed commit.
    pub async fn add_entry(&self, day: NaiveDate, steps: i64) -> Result<(), StoreError> {
        if steps < 0 {
            return Err(StoreError::InvalidArgument(format!(
                "steps must be non-negative, got {steps}"
            )));
        }

        self.execute(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO days (date, steps) VALUES (?1, ?2)
                 ON CONFLICT(date) DO UPDATE SET steps = excluded.steps",
                params![day.to_string(), steps],
            )?;
            tx.commit()?;
            Ok(())
        })
        .await
    }

    pub async fn get_entry(&self, day: NaiveDate) -> Result<Option<DayEntry>, StoreError> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare("SELECT date, steps FROM days WHERE date = ?1")?;

            let mut rows = stmt.query(params![day.to_string()])?;
            match rows.next()? {
                Some(row) => Ok(Some(row_to_entry(row)?)),
                None => Ok(None),
            }
        })
        .await
    }

    /// Entries between `from` and `to`, both bounds inclusive, ascending by
    /// date. Days without an entry simply do not appear; an empty result is
    /// not an error.
    pub async fn get_entries(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DayEntry>, StoreError> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT date, steps FROM days
                 WHERE date >= ?1 AND date <= ?2
                 ORDER BY date ASC",
            )?;

            let mut rows = stmt.query(params![from.to_string(), to.to_string()])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_entry(row)?);
            }

            Ok(entries)
        })
        .await
    }

    /// Earliest stored day, or `NotFound` when there is no history yet.
    pub async fn first_entry(&self) -> Result<NaiveDate, StoreError> {
        self.bound_entry("SELECT MIN(date) FROM days").await
    }

    /// Latest stored day, or `NotFound` when there is no history yet.
    pub async fn last_entry(&self) -> Result<NaiveDate, StoreError> {
        self.bound_entry("SELECT MAX(date) FROM days").await
    }

    async fn bound_entry(&self, sql: &'static str) -> Result<NaiveDate, StoreError> {
        self.execute(move |conn| {
            let bound: Option<String> = conn.query_row(sql, [], |row| row.get(0))?;
            match bound {
                Some(raw) => parse_day(&raw),
                None => Err(StoreError::NotFound),
            }
        })
        .await
    }

    /// Total steps over an inclusive date range.
    pub async fn sum_steps(&self, from: NaiveDate, to: NaiveDate) -> Result<u64, StoreError> {
        self.execute(move |conn| {
            let sum: i64 = conn.query_row(
                "SELECT COALESCE(SUM(steps), 0) FROM days
                 WHERE date >= ?1 AND date <= ?2",
                params![from.to_string(), to.to_string()],
                |row| row.get(0),
            )?;

            u64::try_from(sum)
                .map_err(|_| StoreError::Storage(format!("step sum overflowed: {sum}")))
        })
        .await
    }

    pub async fn entry_count(&self) -> Result<u64, StoreError> {
        self.execute(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM days", [], |row| row.get(0))?;
            u64::try_from(count)
                .map_err(|_| StoreError::Storage(format!("entry count out of range: {count}")))
        })
        .await
    }
}
