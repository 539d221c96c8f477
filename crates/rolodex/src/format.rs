//! Display formatting for dates and counts.
//!
//! These helpers are pure: the current date is always passed in, so the
//! same inputs always render the same text.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rolodex::format::{compact_count, relative_time};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let then = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
//!
//! assert_eq!(relative_time(then, now).to_string(), "3 days ago");
//! assert_eq!(relative_time(now, now).with_prefix("Connected"), "Connected today");
//! assert_eq!(compact_count(2_400), "2.4K");
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone};

/// A calendar distance between a date and "now", bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeTime {
    Today,
    DaysAgo(u32),
    WeeksAgo(u32),
    MonthsAgo(u32),
    YearsAgo(u32),
    Tomorrow,
    InDays(u32),
    InWeeks(u32),
    InMonths(u32),
    InYears(u32),
}

impl RelativeTime {
    /// Buckets a signed day distance. Positive is the past.
    pub fn from_days(days: i64) -> Self {
        use RelativeTime::*;

        let n = days.unsigned_abs();
        let count = |divisor: u64| u32::try_from(n / divisor).unwrap_or(u32::MAX);
        let past = days > 0;
        match n {
            0 => Today,
            1 if !past => Tomorrow,
            1..=7 => {
                if past {
                    DaysAgo(count(1))
                } else {
                    InDays(count(1))
                }
            }
            8..=29 => {
                if past {
                    WeeksAgo(count(7))
                } else {
                    InWeeks(count(7))
                }
            }
            30..=364 => {
                if past {
                    MonthsAgo(count(30))
                } else {
                    InMonths(count(30))
                }
            }
            _ => {
                if past {
                    YearsAgo(count(365))
                } else {
                    InYears(count(365))
                }
            }
        }
    }

    /// Joins a verb in front of the label: "Connected today",
    /// "Joined 2 weeks ago", "Starts in 3 days".
    pub fn with_prefix(&self, prefix: &str) -> String {
        let label = self.to_string();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => format!("{} {}{}", prefix, first.to_lowercase(), chars.as_str()),
            None => prefix.to_string(),
        }
    }

    pub fn is_future(&self) -> bool {
        matches!(
            self,
            RelativeTime::Tomorrow
                | RelativeTime::InDays(_)
                | RelativeTime::InWeeks(_)
                | RelativeTime::InMonths(_)
                | RelativeTime::InYears(_)
        )
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RelativeTime::Today => write!(f, "Today"),
            RelativeTime::DaysAgo(n) => write!(f, "{} ago", plural(n, "day")),
            RelativeTime::WeeksAgo(n) => write!(f, "{} ago", plural(n, "week")),
            RelativeTime::MonthsAgo(n) => write!(f, "{} ago", plural(n, "month")),
            RelativeTime::YearsAgo(n) => write!(f, "{} ago", plural(n, "year")),
            RelativeTime::Tomorrow => write!(f, "Tomorrow"),
            RelativeTime::InDays(n) => write!(f, "In {}", plural(n, "day")),
            RelativeTime::InWeeks(n) => write!(f, "In {}", plural(n, "week")),
            RelativeTime::InMonths(n) => write!(f, "In {}", plural(n, "month")),
            RelativeTime::InYears(n) => write!(f, "In {}", plural(n, "year")),
        }
    }
}

/// Calendar-day distance from `then` to `now`.
pub fn relative_time(then: NaiveDate, now: NaiveDate) -> RelativeTime {
    RelativeTime::from_days(now.signed_duration_since(then).num_days())
}

/// [`relative_time`] for datetimes, compared by their calendar dates in
/// the datetimes' own time zone.
pub fn relative_datetime<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> RelativeTime {
    relative_time(then.date_naive(), now.date_naive())
}

/// Short count label: `890`, `1.2K`, `3.4M`.
///
/// Thousands and millions keep one decimal, rounded half up. A thousands
/// value that rounds to `1000.0K` is shown as millions instead.
pub fn compact_count(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }

    let n = u128::from(n);
    let tenths_k = (n + 50) / 100;
    if tenths_k < 10_000 {
        return format!("{}.{}K", tenths_k / 10, tenths_k % 10);
    }

    let tenths_m = (n + 50_000) / 100_000;
    format!("{}.{}M", tenths_m / 10, tenths_m % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_is_today() {
        let now = date(2024, 3, 20);
        assert_eq!(relative_time(now, now), RelativeTime::Today);
        assert_eq!(relative_time(now, now).to_string(), "Today");
        assert_eq!(relative_time(now, now).with_prefix("Connected"), "Connected today");
    }

    #[test]
    fn past_buckets() {
        let now = date(2024, 3, 20);
        let ago = |days: i64| relative_time(now - chrono::Duration::days(days), now).to_string();

        assert_eq!(ago(1), "1 day ago");
        assert_eq!(ago(7), "7 days ago");
        assert_eq!(ago(8), "1 week ago");
        assert_eq!(ago(29), "4 weeks ago");
        assert_eq!(ago(30), "1 month ago");
        assert_eq!(ago(45), "1 month ago");
        assert_eq!(ago(364), "12 months ago");
        assert_eq!(ago(365), "1 year ago");
        assert_eq!(ago(800), "2 years ago");
    }

    #[test]
    fn future_buckets() {
        let now = date(2024, 3, 20);
        let ahead = |days: i64| relative_time(now + chrono::Duration::days(days), now);

        assert_eq!(ahead(1), RelativeTime::Tomorrow);
        assert_eq!(ahead(3).to_string(), "In 3 days");
        assert_eq!(ahead(14).to_string(), "In 2 weeks");
        assert_eq!(ahead(60).to_string(), "In 2 months");
        assert_eq!(ahead(3).with_prefix("Starts"), "Starts in 3 days");
        assert!(ahead(3).is_future());
        assert!(!relative_time(now, now).is_future());
    }

    #[test]
    fn datetimes_compare_by_calendar_day() {
        use chrono::Utc;
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 0, 5, 0).unwrap();
        let late_yesterday = Utc.with_ymd_and_hms(2024, 3, 19, 23, 55, 0).unwrap();
        assert_eq!(relative_datetime(&late_yesterday, &now), RelativeTime::DaysAgo(1));
    }

    #[test]
    fn counts() {
        assert_eq!(compact_count(0), "0");
        assert_eq!(compact_count(890), "890");
        assert_eq!(compact_count(999), "999");
        assert_eq!(compact_count(1_000), "1.0K");
        assert_eq!(compact_count(1_200), "1.2K");
        assert_eq!(compact_count(1_250), "1.3K");
        assert_eq!(compact_count(1_249), "1.2K");
        assert_eq!(compact_count(999_949), "999.9K");
        assert_eq!(compact_count(999_950), "1.0M");
        assert_eq!(compact_count(3_400_000), "3.4M");
        assert_eq!(compact_count(u64::MAX), "18446744073709.6M");
    }

    proptest! {
        #[test]
        fn older_never_reads_newer(a in 0i64..2000, b in 0i64..2000) {
            let rank = |days: i64| match RelativeTime::from_days(days) {
                RelativeTime::Today => (0, 0),
                RelativeTime::DaysAgo(n) => (1, n),
                RelativeTime::WeeksAgo(n) => (2, n),
                RelativeTime::MonthsAgo(n) => (3, n),
                RelativeTime::YearsAgo(n) => (4, n),
                other => panic!("past distance bucketed as {:?}", other),
            };
            if a <= b {
                prop_assert!(rank(a) <= rank(b));
            }
        }

        #[test]
        fn compact_count_small_values_are_verbatim(n in 0u64..1000) {
            prop_assert_eq!(compact_count(n), n.to_string());
        }
    }
}
