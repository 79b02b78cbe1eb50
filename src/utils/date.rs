//! Calendar-day normalization in the device's local time zone.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// The calendar day a timestamp falls on, in local time: the date part of
/// [`start_of_day`].
pub fn day_of(ts: DateTime<Local>) -> NaiveDate {
    start_of_day(ts).date_naive()
}

/// 00:00:00 of the timestamp's local calendar day.
///
/// On days where local midnight does not exist (a DST jump across it) the
/// earliest valid instant of the day is returned; when midnight occurs
/// twice, the first occurrence wins.
pub fn start_of_day(ts: DateTime<Local>) -> DateTime<Local> {
    let midnight = ts.date_naive().and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(first, _) => first,
        LocalResult::None => (midnight + Duration::hours(1))
            .and_local_timezone(Local)
            .earliest()
            .unwrap_or(ts),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn strips_time_of_day() {
        let ts = Local.with_ymd_and_hms(2025, 6, 10, 17, 42, 9).unwrap();
        let midnight = start_of_day(ts);

        assert_eq!(day_of(midnight), day_of(ts));
        assert_eq!(midnight.hour(), 0);
        assert_eq!(midnight.minute(), 0);
        assert_eq!(midnight.second(), 0);
    }

    #[test]
    fn is_deterministic() {
        let ts = Local.with_ymd_and_hms(2025, 6, 10, 23, 59, 59).unwrap();
        assert_eq!(start_of_day(ts), start_of_day(ts));
        assert_eq!(start_of_day(start_of_day(ts)), start_of_day(ts));
    }

    #[test]
    fn day_of_is_the_date_of_start_of_day() {
        let ts = Local.with_ymd_and_hms(2025, 3, 1, 8, 15, 0).unwrap();
        assert_eq!(day_of(ts), start_of_day(ts).date_naive());
        assert_eq!(day_of(start_of_day(ts)), day_of(ts));
    }

    #[test]
    fn handles_month_and_year_boundaries() {
        let new_years_eve = Local.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(
            day_of(new_years_eve),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );

        let one_hour_later = new_years_eve + Duration::hours(1);
        assert_eq!(
            day_of(one_hour_later),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );

        let leap_day = Local.with_ymd_and_hms(2024, 2, 29, 6, 30, 0).unwrap();
        assert_eq!(
            day_of(start_of_day(leap_day)),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
