//! Module handling dates and date ranges
//!
//! A day is always given as `YYYY-MM-DD`, the archives being published one per calendar day.
//! We accept either a single day, a day and a count of consecutive days or an inclusive
//! interval written `BEGIN..END`.
//!

use chrono::NaiveDate;
use thiserror::Error;
use tracing::trace;

/// Only accepted input format for a day
const DAY_FMT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("bad date: {0}")]
    BadDate(String),
    #[error("Bad interval, need single or couple dates: {0}")]
    BadInterval(String),
    #[error("interval ends ({1}) before it begins ({0})")]
    Reversed(NaiveDate, NaiveDate),
    #[error("day count must be at least 1")]
    EmptyRange,
    #[error("can not use both an interval and a day count")]
    Conflict,
}

/// What days the user asked for.
///
#[derive(Clone, Debug, PartialEq)]
pub enum DateSpec {
    /// One day, one anonymous output
    Day(NaiveDate),
    /// Consecutive days, one output per day
    Days(Vec<NaiveDate>),
}

impl DateSpec {
    /// Build from the `--date` and `--range` options.
    ///
    #[tracing::instrument]
    pub fn parse(date: &str, range: Option<u32>) -> Result<Self, DateError> {
        let (begin, end) = parse_range(date)?;
        let is_interval = begin != end;
        let begin = parse_day(&begin)?;

        match range {
            Some(_) if is_interval => Err(DateError::Conflict),
            Some(0) => Err(DateError::EmptyRange),
            Some(n) => Ok(DateSpec::Days(expand_days(begin, n))),
            None if is_interval => {
                let end = parse_day(&end)?;
                if end < begin {
                    return Err(DateError::Reversed(begin, end));
                }
                let days: Vec<NaiveDate> = begin.iter_days().take_while(|d| *d <= end).collect();
                trace!("{} days in interval", days.len());
                Ok(DateSpec::Days(days))
            }
            None => Ok(DateSpec::Day(begin)),
        }
    }

    /// All days to process, in calendar order.
    ///
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            DateSpec::Day(day) => vec![*day],
            DateSpec::Days(days) => days.clone(),
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, DateSpec::Days(_))
    }
}

/// Parse one `YYYY-MM-DD` day.
///
pub fn parse_day(day: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(day.trim(), DAY_FMT).map_err(|_| DateError::BadDate(day.to_string()))
}

/// Return `n` consecutive days starting with (and including) `start`.
///
pub fn expand_days(start: NaiveDate, n: u32) -> Vec<NaiveDate> {
    start.iter_days().take(n as usize).collect()
}

/// Split `BEGIN..END` into its two sides, a single date is returned twice.
///
pub fn parse_range(date: &str) -> Result<(String, String), DateError> {
    let intv: Vec<&str> = date.split("..").collect();
    let (start, end) = match intv.len() {
        1 => (intv[0], intv[0]),
        2 => (intv[0], intv[1]),
        _ => return Err(DateError::BadInterval(date.to_string())),
    };
    // if end is empty, we had only "DDDD.." so return start both times
    //
    if end.is_empty() {
        Ok((start.to_string(), start.to_string()))
    } else {
        Ok((start.to_string(), end.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DAY_FMT).unwrap()
    }

    #[rstest]
    #[case("2024-02-01", ("2024-02-01", "2024-02-01"))]
    #[case("2024-02-01..2024-03-01", ("2024-02-01", "2024-03-01"))]
    #[case("2024-02-01..", ("2024-02-01", "2024-02-01"))]
    fn test_parse_range(#[case] inp: &str, #[case] out: (&str, &str)) {
        let (b, e) = parse_range(inp).unwrap();
        assert_eq!(out, (b.as_str(), e.as_str()));
    }

    #[test]
    fn test_parse_range_too_many() {
        let r = parse_range("2024-02-01..2024-02-02..2024-02-03");
        assert!(matches!(r, Err(DateError::BadInterval(_))));
    }

    #[rstest]
    #[case("2024-65-01")]
    #[case("01/02/2024")]
    #[case("")]
    fn test_parse_day_bad(#[case] inp: &str) {
        assert_eq!(Err(DateError::BadDate(inp.to_string())), parse_day(inp));
    }

    #[test]
    fn test_single_day() {
        let spec = DateSpec::parse("2017-01-01", None).unwrap();
        assert_eq!(DateSpec::Day(day("2017-01-01")), spec);
        assert!(!spec.is_range());
        assert_eq!(vec![day("2017-01-01")], spec.dates());
    }

    #[test]
    fn test_count_crosses_month() {
        let spec = DateSpec::parse("2017-01-30", Some(4)).unwrap();
        assert!(spec.is_range());
        assert_eq!(
            vec![
                day("2017-01-30"),
                day("2017-01-31"),
                day("2017-02-01"),
                day("2017-02-02")
            ],
            spec.dates()
        );
    }

    #[test]
    fn test_count_of_one() {
        let spec = DateSpec::parse("2016-02-29", Some(1)).unwrap();
        assert_eq!(vec![day("2016-02-29")], spec.dates());
    }

    #[test]
    fn test_count_zero() {
        assert_eq!(Err(DateError::EmptyRange), DateSpec::parse("2017-01-01", Some(0)));
    }

    #[test]
    fn test_interval_inclusive() {
        let spec = DateSpec::parse("2017-12-30..2018-01-02", None).unwrap();
        assert_eq!(4, spec.dates().len());
        assert_eq!(day("2018-01-02"), *spec.dates().last().unwrap());
    }

    #[test]
    fn test_interval_reversed() {
        let r = DateSpec::parse("2017-01-05..2017-01-01", None);
        assert_eq!(
            Err(DateError::Reversed(day("2017-01-05"), day("2017-01-01"))),
            r
        );
    }

    #[test]
    fn test_interval_and_count() {
        assert_eq!(
            Err(DateError::Conflict),
            DateSpec::parse("2017-01-01..2017-01-03", Some(2))
        );
    }
}
