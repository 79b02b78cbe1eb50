use chrono::NaiveDate;

use super::StoreError;

pub fn to_u32(value: i64, field: &str) -> Result<u32, StoreError> {
    u32::try_from(value)
        .map_err(|_| StoreError::Storage(format!("{field} holds out-of-range value {value}")))
}

pub fn parse_day(value: &str) -> Result<NaiveDate, StoreError> {
    value
        .parse()
        .map_err(|_| StoreError::Storage(format!("invalid date key '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_step_column() {
        assert!(matches!(to_u32(-1, "steps"), Err(StoreError::Storage(_))));
        assert_eq!(to_u32(8000, "steps").unwrap(), 8000);
    }

    #[test]
    fn parses_iso_date_keys() {
        assert_eq!(
            parse_day("2025-06-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
        );
        assert!(parse_day("10.06.2025").is_err());
    }
}
