use crate::utils::months_between;
use chrono::NaiveDate;

/// Inclusive month span the entity is obligated to pay within the fiscal
/// year. An unparseable activation date means the entity was never active;
/// an activation after the fiscal year end clamps to zero. Always in 0..=12.
pub fn active_months(activation_date: Option<NaiveDate>, fiscal_year: i32) -> u32 {
    let activation = match activation_date {
        Some(date) => date,
        None => return 0,
    };

    let year_start = NaiveDate::from_ymd_opt(fiscal_year, 1, 1).unwrap_or(activation);
    let year_end = match NaiveDate::from_ymd_opt(fiscal_year, 12, 31) {
        Some(date) => date,
        None => return 0,
    };

    let start = activation.max(year_start);
    let span = months_between(start, year_end) + 1;
    span.max(0) as u32
}
