use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted row: total steps for a single calendar day.
///
/// The date is the unique key; there is never more than one entry per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub date: NaiveDate,
    pub steps: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_plain_date_key() {
        let entry = DayEntry {
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            steps: 4200,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"date":"2025-06-10","steps":4200}"#);

        let back: DayEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
