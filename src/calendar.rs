use crate::consts::{
    CENTURY_CYCLE, GREGORIAN_CYCLE, GREGORIAN_CYCLE_BASE, LAST_WEEK_DAY, LAST_WEEK_MONTH,
    LEAP_YEAR_CYCLE, WEEKS_IN_LONG_YEAR, WEEKS_IN_SHORT_YEAR,
};
use chrono::{Datelike, NaiveDate};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of ISO weeks (52 or 53) in the given week-numbering year.
///
/// December 28 always lies in the last ISO week of its year, so its week
/// number is the week count. The proleptic Gregorian calendar repeats every
/// 400 years in whole weeks, which lets any `i32` year be mapped into a
/// window chrono can represent.
pub fn weeks_in_year(year: i32) -> u8 {
    let equivalent = GREGORIAN_CYCLE_BASE + year.rem_euclid(GREGORIAN_CYCLE);
    // always Some: `equivalent` is within 2000..2400
    let last_week = NaiveDate::from_ymd_opt(equivalent, LAST_WEEK_MONTH, LAST_WEEK_DAY)
        .map_or(0, |date| date.iso_week().week());

    if last_week == u32::from(WEEKS_IN_LONG_YEAR) {
        WEEKS_IN_LONG_YEAR
    } else {
        WEEKS_IN_SHORT_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_YEAR, MIN_YEAR};
    use chrono::Weekday;

    #[test]
    fn test_weeks_in_year_cases() {
        struct TestCase {
            year: i32,
            weeks: u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2003,
                weeks: 52,
                description: "starts on Wednesday, not leap",
            },
            TestCase {
                year: 2004,
                weeks: 53,
                description: "starts on Thursday",
            },
            TestCase {
                year: 2005,
                weeks: 52,
                description: "starts on Saturday",
            },
            TestCase {
                year: 2009,
                weeks: 53,
                description: "starts on Thursday",
            },
            TestCase {
                year: 2015,
                weeks: 53,
                description: "starts on Thursday",
            },
            TestCase {
                year: 2020,
                weeks: 53,
                description: "leap year starting on Wednesday",
            },
            TestCase {
                year: 2026,
                weeks: 53,
                description: "starts on Thursday",
            },
            TestCase {
                year: 1900,
                weeks: 52,
                description: "century non-leap starting on Monday",
            },
            TestCase {
                year: 2000,
                weeks: 52,
                description: "leap year starting on Saturday",
            },
            TestCase {
                year: 0,
                weeks: 52,
                description: "same cycle position as 2000",
            },
            TestCase {
                year: 1,
                weeks: 52,
                description: "starts on Monday",
            },
            TestCase {
                year: 9999,
                weeks: 52,
                description: "starts on Friday",
            },
        ];

        for case in &cases {
            assert_eq!(
                weeks_in_year(case.year),
                case.weeks,
                "Year {} ({}): expected {} weeks",
                case.year,
                case.description,
                case.weeks
            );
        }
    }

    #[test]
    fn test_weeks_in_year_only_short_or_long() {
        for year in MIN_YEAR..=MAX_YEAR {
            let weeks = weeks_in_year(year);
            assert!(
                weeks == WEEKS_IN_SHORT_YEAR || weeks == WEEKS_IN_LONG_YEAR,
                "Year {year} has {weeks} weeks"
            );
        }
    }

    #[test]
    fn test_weeks_in_year_matches_january_first_rule() {
        // 53 weeks iff Jan 1 is a Thursday, or a Wednesday in a leap year
        for year in 1..=MAX_YEAR {
            let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap().weekday();
            let long = jan1 == Weekday::Thu || (is_leap_year(year) && jan1 == Weekday::Wed);
            let expected = if long {
                WEEKS_IN_LONG_YEAR
            } else {
                WEEKS_IN_SHORT_YEAR
            };
            assert_eq!(weeks_in_year(year), expected, "Year {year}");
        }
    }

    #[test]
    fn test_weeks_in_year_repeats_every_400_years() {
        for year in [-400, -399, -1, 5, 1992, 2004, 123_456, i32::MIN, i32::MAX] {
            let weeks = weeks_in_year(year);
            assert!(weeks == WEEKS_IN_SHORT_YEAR || weeks == WEEKS_IN_LONG_YEAR);
        }
        assert_eq!(weeks_in_year(-400), weeks_in_year(0));
        assert_eq!(weeks_in_year(-396), weeks_in_year(4));
        assert_eq!(weeks_in_year(2404), weeks_in_year(2004));
    }

    #[test]
    fn test_is_leap_year_cases() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900), "century not divisible by 400");
        assert!(!is_leap_year(2100), "century not divisible by 400");
        assert!(is_leap_year(2000), "divisible by 400");
        assert!(is_leap_year(0), "divisible by 400");
    }
}
