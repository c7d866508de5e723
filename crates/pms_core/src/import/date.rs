//! Project start-date parsing.
//!
//! Accepted layouts, tried in order:
//! - `YYYY-MM-DD`
//! - `DD.MM.YYYY`
//! - `YYYY`, read as January 1st of that year

use super::RowError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid iso date regex"));
static DOTTED_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid dotted date regex"));
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year regex"));

/// Parses a trimmed start-date value.
///
/// # Errors
/// - `UnknownDateFormat` when no layout matches.
/// - `InvalidCalendarDate` when a layout matches but the day does not exist.
pub fn parse_start_date(value: &str) -> Result<NaiveDate, RowError> {
    let parsed = if ISO_DATE_RE.is_match(value) {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    } else if DOTTED_DATE_RE.is_match(value) {
        NaiveDate::parse_from_str(value, "%d.%m.%Y").ok()
    } else if YEAR_RE.is_match(value) {
        value
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
    } else {
        return Err(RowError::UnknownDateFormat(value.to_string()));
    };

    parsed.ok_or_else(|| RowError::InvalidCalendarDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_start_date;
    use crate::import::RowError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_all_three_layouts() {
        assert_eq!(parse_start_date("2015-01-01").unwrap(), date(2015, 1, 1));
        assert_eq!(parse_start_date("01.03.2016").unwrap(), date(2016, 3, 1));
        assert_eq!(parse_start_date("2017").unwrap(), date(2017, 1, 1));
    }

    #[test]
    fn dotted_layout_is_day_first() {
        assert_eq!(parse_start_date("31.12.2020").unwrap(), date(2020, 12, 31));
    }

    #[test]
    fn rejects_other_shapes() {
        for value in ["", "next spring", "2015/01/01", "1.3.2016", "15", "2015-1-1", " 2015"] {
            assert_eq!(
                parse_start_date(value).unwrap_err(),
                RowError::UnknownDateFormat(value.to_string()),
                "value: {value:?}"
            );
        }
    }

    #[test]
    fn rejects_impossible_days() {
        assert_eq!(
            parse_start_date("2019-13-45").unwrap_err(),
            RowError::InvalidCalendarDate("2019-13-45".to_string())
        );
        assert_eq!(
            parse_start_date("30.02.2021").unwrap_err(),
            RowError::InvalidCalendarDate("30.02.2021".to_string())
        );
    }

    #[test]
    fn leap_day_is_accepted() {
        assert_eq!(parse_start_date("29.02.2020").unwrap(), date(2020, 2, 29));
    }
}
