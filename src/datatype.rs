// used to validate that a date exists in the calendar
use chrono::{Datelike, NaiveDate};
// the date and age shapes are matched once and reused
use lazy_static::lazy_static;
use regex::Regex;

// used to print out the literal forms
use std::fmt;

use crate::error::{KinsfolkError, Result};
use crate::vocabulary::YEAR_UNIT;

lazy_static! {
    // ASCII digits only
    static ref FULL_DATE: Regex = Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap();
    static ref YEAR_MONTH: Regex = Regex::new(r"^([0-9]{4})-([0-9]{2})$").unwrap();
    static ref YEAR: Regex = Regex::new(r"^([0-9]{4})$").unwrap();
    static ref AGE: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap();
}

// ------------- Strings -------------

/// Wraps `s` in double quotes, escaping embedded quotes with a backslash.
///
/// Backslashes are not escaped themselves, which is the quoting convention of
/// the statement-edit format. A quote that already follows a backslash counts
/// as escaped, so quoting the inner text of a quoted literal gives the same literal.
pub fn format_quoted_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    let mut after_backslash = false;
    for c in s.chars() {
        if c == '"' && !after_backslash {
            quoted.push('\\');
        }
        after_backslash = c == '\\';
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

// ------------- Time -------------
#[derive(Eq, PartialEq, PartialOrd, Ord, Debug, Hash, Clone, Copy)]
pub enum Precision {
    Year,
    Month,
    Day,
}
impl Precision {
    /// The precision marker written after the slash of a time literal.
    pub fn code(&self) -> u8 {
        match self {
            Precision::Year => 9,
            Precision::Month => 10,
            Precision::Day => 11,
        }
    }
}

#[derive(Eq, PartialEq, PartialOrd, Ord, Debug, Hash, Clone)]
pub enum TimeType {
    Year(NaiveDate),
    YearMonth(NaiveDate),
    Date(NaiveDate),
}

/// A calendar date with the precision it was entered with.
///
/// Partial dates are anchored on the first day of their month or year.
#[derive(Eq, PartialEq, PartialOrd, Ord, Debug, Hash, Clone)]
pub struct Time {
    moment: TimeType,
}
impl Time {
    pub fn parse(s: &str) -> Result<Time> {
        let invalid = || KinsfolkError::MalformedDate { value: s.to_string() };
        let moment = if let Some(c) = FULL_DATE.captures(s) {
            TimeType::Date(ymd(&c[1], &c[2], &c[3]).ok_or_else(invalid)?)
        } else if let Some(c) = YEAR_MONTH.captures(s) {
            TimeType::YearMonth(ymd(&c[1], &c[2], "01").ok_or_else(invalid)?)
        } else if let Some(c) = YEAR.captures(s) {
            TimeType::Year(ymd(&c[1], "01", "01").ok_or_else(invalid)?)
        } else {
            return Err(invalid());
        };
        Ok(Time { moment })
    }
    pub fn precision(&self) -> Precision {
        match self.moment {
            TimeType::Year(_) => Precision::Year,
            TimeType::YearMonth(_) => Precision::Month,
            TimeType::Date(_) => Precision::Day,
        }
    }
    pub fn date(&self) -> NaiveDate {
        match self.moment {
            TimeType::Year(d) | TimeType::YearMonth(d) | TimeType::Date(d) => d,
        }
    }
}
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.date();
        write!(
            f,
            "+{:04}-{:02}-{:02}T00:00:00Z/{}",
            d.year(),
            d.month(),
            d.day(),
            self.precision().code()
        )
    }
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Formats `YYYY-MM-DD`, `YYYY-MM` or `YYYY` as a signed time literal with precision.
pub fn format_date(s: &str) -> Result<String> {
    Ok(Time::parse(s)?.to_string())
}

// ------------- Age -------------

/// Formats an age in years as a quantity carrying the year unit.
pub fn format_age(s: &str) -> Result<String> {
    if !AGE.is_match(s) {
        return Err(KinsfolkError::MalformedAge { value: s.to_string() });
    }
    Ok(format!("{}{}", s, YEAR_UNIT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_plain_text() {
        assert_eq!(format_quoted_string("Texas Births"), "\"Texas Births\"");
        assert_eq!(format_quoted_string(""), "\"\"");
    }

    #[test]
    fn escapes_every_quote_but_not_backslashes() {
        assert_eq!(format_quoted_string("a\"b\"c"), "\"a\\\"b\\\"c\"");
        assert_eq!(format_quoted_string("C:\\dir"), "\"C:\\dir\"");
    }

    #[test]
    fn requoting_does_not_double_escape() {
        let once = format_quoted_string("say \"hi\"");
        let inner = &once[1..once.len() - 1];
        assert_eq!(format_quoted_string(inner), once);
    }

    #[test]
    fn date_precisions() {
        assert_eq!(format_date("1900-05-17").unwrap(), "+1900-05-17T00:00:00Z/11");
        assert_eq!(format_date("1900-05").unwrap(), "+1900-05-01T00:00:00Z/10");
        assert_eq!(format_date("1900").unwrap(), "+1900-01-01T00:00:00Z/9");
    }

    #[test]
    fn time_reports_precision() {
        assert_eq!(Time::parse("1850").unwrap().precision(), Precision::Year);
        assert_eq!(Time::parse("1850-02").unwrap().precision(), Precision::Month);
        assert_eq!(Time::parse("1850-02-28").unwrap().precision(), Precision::Day);
    }

    #[test]
    fn rejects_malformed_dates() {
        for s in ["", "17/05/1900", "1900-5-17", "900", "1900-13", "1900-02-30", " 1900", "19000", "١٩٠٠"] {
            match format_date(s) {
                Err(KinsfolkError::MalformedDate { value }) => assert_eq!(value, s),
                other => panic!("expected {s:?} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn ages() {
        assert_eq!(format_age("42").unwrap(), "42U24564698");
        assert_eq!(format_age("0.5").unwrap(), "0.5U24564698");
        assert!(format_age("about 40").is_err());
        assert!(format_age("-3").is_err());
        assert!(matches!(format_age("٤٢"), Err(KinsfolkError::MalformedAge { .. })));
        assert!(format_age("4\n2").is_err());
    }
}
