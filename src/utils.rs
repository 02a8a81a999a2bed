use crate::error::{ComplianceError, Result};
use chrono::{Datelike, NaiveDate};

/// Abbreviated month with two-digit year, e.g. "Jan-24". The usual header
/// shape Excel produces for monthly payment columns.
pub fn parse_month_short_year(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01-{}", text), "%d-%b-%y").ok()
}

/// A fixed set of unambiguous calendar formats standing in for a fully
/// generic date parse: ISO dates, slash-ISO, day-first, and bare year-month.
pub fn parse_generic(text: &str) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d").ok()
}

/// Month name with four-digit year, e.g. "Jan 2024" or "January 2024".
pub fn parse_month_name_year(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01 {}", text), "%d %b %Y").ok()
}

/// US-style slash-delimited date, e.g. "03/15/2024".
pub fn parse_slash_mdy(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%m/%d/%Y").ok()
}

/// Interprets a column header as a calendar period by trying each format in
/// turn; the first successful parse wins.
pub fn parse_period(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    parse_month_short_year(trimmed)
        .or_else(|| parse_generic(trimmed))
        .or_else(|| parse_month_name_year(trimmed))
        .or_else(|| parse_slash_mdy(trimmed))
}

pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let year_diff = end.year() - start.year();
    let month_diff = end.month() as i32 - start.month() as i32;
    year_diff * 12 + month_diff
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn validate_fiscal_year(year: i32) -> Result<()> {
    if !(2000..=2100).contains(&year) {
        return Err(ComplianceError::InvalidFiscalYear(year));
    }
    Ok(())
}
